//! Input source trait and error types.

use core::future::Future;

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// UART/communication I/O error.
    Io,
    /// UART framing error.
    Framing,
    /// UART parity error.
    Parity,
    /// Receive FIFO overrun (bytes were lost).
    Overrun,
    /// Line held in break condition.
    Break,
}

/// Async trait for serial byte sources.
///
/// Abstracts the receive side of a serial link so the frame decoder can be
/// driven by a UART, a replayed capture, or a test mock.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait InputSource {
    /// Wait for and receive the next byte.
    ///
    /// Suspends indefinitely until a byte arrives. Line-level faults are
    /// reported as errors; the faulty byte is not returned.
    fn read_byte(&mut self) -> impl Future<Output = Result<u8, InputError>>;
}
