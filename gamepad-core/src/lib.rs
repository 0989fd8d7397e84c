//! Platform-agnostic gamepad report types and I/O traits.
//!
//! This crate provides the core abstractions for the gamepad bridge without
//! any platform-specific dependencies. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`types`]: Report data structures ([`GamepadReport`], [`Buttons`])
//! - [`input`]: Serial byte source trait ([`InputSource`])
//! - [`output`]: Report sink trait ([`OutputSink`])
//!
//! # Report Layout
//!
//! ```text
//! byte 0     buttons 1-8 (bit i = button i+1)
//! bytes 1-8  X, Y, Z, Rx, Ry, Rz, slider 1, slider 2 (i8, -127..=127)
//! ```
//!
//! # Example
//!
//! ```rust
//! use gamepad_core::{Buttons, GamepadReport};
//!
//! let report = GamepadReport::from_axes(Buttons::BUTTON_2, [0, 0, 0, 0, 0, 0, 0, 127]);
//! assert_eq!(report.as_bytes()[0], 0x02);
//! assert_eq!(report.as_bytes()[8], 127);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod input;
pub mod output;
pub mod types;

// Re-export main types at crate root
pub use input::{InputError, InputSource};
pub use output::{OutputError, OutputSink};
pub use types::{Buttons, GamepadReport};
