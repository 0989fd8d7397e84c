//! Output sink trait and error types.

use crate::types::GamepadReport;
use core::future::Future;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Endpoint disabled (e.g., USB not configured or unplugged).
    Disabled,
}

/// Async trait for gamepad report sinks.
///
/// This trait abstracts the destination for gamepad reports, enabling
/// different output methods (USB HID, BLE HID, serial debug, etc.).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait OutputSink {
    /// Send a report to the output.
    ///
    /// May block until the previous report has been sent.
    fn send(&mut self, report: &GamepadReport) -> impl Future<Output = Result<(), OutputError>>;
}
