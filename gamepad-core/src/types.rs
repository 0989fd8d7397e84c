//! Core gamepad types: Buttons, GamepadReport.

use core::ops::{BitOr, BitOrAssign};

/// Button state represented as a bitfield.
///
/// Eight buttons, matching the eight one-bit usages of the HID report
/// descriptor. Bit `i` is button `i + 1`.
///
/// # Example
///
/// ```
/// use gamepad_core::Buttons;
///
/// let buttons = Buttons::BUTTON_1 | Buttons::BUTTON_3;
/// assert!(buttons.contains(Buttons::BUTTON_1));
/// assert!(!buttons.contains(Buttons::BUTTON_2));
/// assert_eq!(buttons.raw(), 0b0000_0101);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u8);

impl Buttons {
    pub const BUTTON_1: Self = Self(1 << 0);
    pub const BUTTON_2: Self = Self(1 << 1);
    pub const BUTTON_3: Self = Self(1 << 2);
    pub const BUTTON_4: Self = Self(1 << 3);
    pub const BUTTON_5: Self = Self(1 << 4);
    pub const BUTTON_6: Self = Self(1 << 5);
    pub const BUTTON_7: Self = Self(1 << 6);
    pub const BUTTON_8: Self = Self(1 << 7);

    /// Number of buttons in the report.
    pub const COUNT: usize = 8;

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Button at a zero-based position (`0..8`).
    ///
    /// Returns [`Buttons::NONE`] for positions past the last button.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        if index < Self::COUNT {
            Self(1 << index)
        } else {
            Self::NONE
        }
    }

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u8 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// USB HID gamepad input report.
///
/// Matches the report descriptor: one byte of buttons followed by eight
/// signed 8-bit axes in the range [-127, 127].
///
/// Total size: 9 bytes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    /// Buttons 1-8.
    pub buttons: Buttons,
    pub x: i8,
    pub y: i8,
    pub z: i8,
    /// X rotation.
    pub rx: i8,
    /// Y rotation.
    pub ry: i8,
    /// Z rotation.
    pub rz: i8,
    pub slider1: i8,
    pub slider2: i8,
}

impl GamepadReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 9;

    /// Number of analog axes in the report.
    pub const AXES: usize = 8;

    /// Neutral/zero report.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::NONE,
            x: 0,
            y: 0,
            z: 0,
            rx: 0,
            ry: 0,
            rz: 0,
            slider1: 0,
            slider2: 0,
        }
    }

    /// Build a report from buttons and axes in wire order
    /// (X, Y, Z, Rx, Ry, Rz, slider 1, slider 2).
    #[must_use]
    pub const fn from_axes(buttons: Buttons, axes: [i8; Self::AXES]) -> Self {
        Self {
            buttons,
            x: axes[0],
            y: axes[1],
            z: axes[2],
            rx: axes[3],
            ry: axes[4],
            rz: axes[5],
            slider1: axes[6],
            slider2: axes[7],
        }
    }

    /// Axes in wire order.
    #[must_use]
    pub const fn axes(&self) -> [i8; Self::AXES] {
        [
            self.x,
            self.y,
            self.z,
            self.rx,
            self.ry,
            self.rz,
            self.slider1,
            self.slider2,
        ]
    }

    /// Convert the report to its wire bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.buttons.raw();
        for (dst, axis) in bytes[1..].iter_mut().zip(self.axes()) {
            *dst = axis as u8;
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::BUTTON_1 | Buttons::BUTTON_2;
        assert!(buttons.contains(Buttons::BUTTON_1));
        assert!(buttons.contains(Buttons::BUTTON_2));
        assert!(!buttons.contains(Buttons::BUTTON_3));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::BUTTON_8, true);
        assert_eq!(buttons.raw(), 0x80);
        buttons.set(Buttons::BUTTON_8, false);
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_buttons_from_index() {
        assert_eq!(Buttons::from_index(0), Buttons::BUTTON_1);
        assert_eq!(Buttons::from_index(7), Buttons::BUTTON_8);
        assert_eq!(Buttons::from_index(8), Buttons::NONE);
    }

    #[test]
    fn test_report_wire_layout() {
        let report = GamepadReport::from_axes(
            Buttons::BUTTON_1 | Buttons::BUTTON_8,
            [-127, 127, 0, 1, -1, 64, -64, 5],
        );
        assert_eq!(
            report.as_bytes(),
            [0x81, 0x81, 0x7F, 0x00, 0x01, 0xFF, 0x40, 0xC0, 0x05]
        );
    }

    #[test]
    fn test_report_neutral() {
        assert_eq!(GamepadReport::neutral().as_bytes(), [0u8; GamepadReport::SIZE]);
        assert_eq!(GamepadReport::neutral(), GamepadReport::default());
    }

    #[test]
    fn test_report_axes_order() {
        let report = GamepadReport::from_axes(Buttons::NONE, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(report.x, 1);
        assert_eq!(report.rz, 6);
        assert_eq!(report.slider2, 8);
        assert_eq!(report.axes(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
