// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

//! 7-segment digits and the character LCD.

use derive_more::{From, Into};
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Number of 7-segment digits
pub const LEN_DIGITS: usize = Digit::COUNT;

/// Number of lines of the LCD
pub const LEN_LINES: usize = 2;

/// Number of characters per LCD line
pub const LCD_LINE_LEN: usize = 56;

/// Number of characters of the whole LCD
pub const LCD_LEN: usize = LEN_LINES * LCD_LINE_LEN;

/// Number of rows of the C4 LCD
pub const LEN_C4_ROWS: usize = 4;

/// Number of characters per row of the C4 LCD
pub const LCD_C4_ROW_LEN: usize = 56;

const DIGIT_CONTROLLER_BASE: u8 = 0x40;

/// A single cell of the timecode or assignment display.
///
/// The timecode digits are numbered from right to left.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum Digit {
    Timecode1,
    Timecode2,
    Timecode3,
    Timecode4,
    Timecode5,
    Timecode6,
    Timecode7,
    Timecode8,
    Timecode9,
    Timecode10,
    AssignmentRight,
    AssignmentLeft,
}

impl Digit {
    /// Number of timecode digits
    pub const TIMECODE_LEN: usize = 10;

    /// Offset from the first controller
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_offset(offset: u8) -> Option<Self> {
        Self::from_repr(offset)
    }

    /// Controller number
    #[must_use]
    pub const fn controller(self) -> u8 {
        DIGIT_CONTROLLER_BASE + self.offset()
    }

    #[must_use]
    pub const fn from_controller(controller: u8) -> Option<Self> {
        if controller < DIGIT_CONTROLLER_BASE {
            return None;
        }
        Self::from_repr(controller - DIGIT_CONTROLLER_BASE)
    }
}

/// A character of the 7-segment display.
///
/// Letters use their upper case ASCII codes. Adding [`Char::DOT`]
/// lights the dot next to the character. Codes in the ranges
/// `0x40..=0x60` and `0x80..=0xa0` are shifted down by `0x40` when
/// encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct Char(u8);

impl Char {
    pub const DOT: u8 = 0x40;

    pub const AT: Self = Self(b'@');
    pub const A: Self = Self(b'A');
    pub const B: Self = Self(b'B');
    pub const C: Self = Self(b'C');
    pub const D: Self = Self(b'D');
    pub const E: Self = Self(b'E');
    pub const F: Self = Self(b'F');
    pub const G: Self = Self(b'G');
    pub const H: Self = Self(b'H');
    pub const I: Self = Self(b'I');
    pub const J: Self = Self(b'J');
    pub const K: Self = Self(b'K');
    pub const L: Self = Self(b'L');
    pub const M: Self = Self(b'M');
    pub const N: Self = Self(b'N');
    pub const O: Self = Self(b'O');
    pub const P: Self = Self(b'P');
    pub const Q: Self = Self(b'Q');
    pub const R: Self = Self(b'R');
    pub const S: Self = Self(b'S');
    pub const T: Self = Self(b'T');
    pub const U: Self = Self(b'U');
    pub const V: Self = Self(b'V');
    pub const W: Self = Self(b'W');
    pub const X: Self = Self(b'X');
    pub const Y: Self = Self(b'Y');
    pub const Z: Self = Self(b'Z');

    pub const SPACE: Self = Self(b' ');
    pub const MINUS: Self = Self(b'-');

    pub const DIGIT_0: Self = Self(b'0');
    pub const DIGIT_1: Self = Self(b'1');
    pub const DIGIT_2: Self = Self(b'2');
    pub const DIGIT_3: Self = Self(b'3');
    pub const DIGIT_4: Self = Self(b'4');
    pub const DIGIT_5: Self = Self(b'5');
    pub const DIGIT_6: Self = Self(b'6');
    pub const DIGIT_7: Self = Self(b'7');
    pub const DIGIT_8: Self = Self(b'8');
    pub const DIGIT_9: Self = Self(b'9');

    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Upper-cased ASCII character
    #[must_use]
    pub const fn from_ascii(ascii: u8) -> Self {
        Self(ascii.to_ascii_uppercase())
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// The same character with the dot lit.
    ///
    /// Raw glyph codes `0x00..=0x20` are equivalent to the upper case
    /// letters `0x40..=0x60` and are shifted into the dotted letter range.
    /// Characters that already have the dot lit or that have no valid
    /// encoding are returned unmodified.
    #[must_use]
    pub const fn with_dot(self) -> Self {
        match self.0 {
            0x00..=0x20 => Self(self.0 + 2 * Self::DOT),
            0x21..=0x60 => Self(self.0 + Self::DOT),
            _ => self,
        }
    }

    #[must_use]
    pub const fn has_dot(self) -> bool {
        matches!(self.0, 0x61..=0xa0)
    }

    /// The code that is sent to the surface.
    ///
    /// Returns `None` if the character has no valid encoding.
    #[must_use]
    pub const fn to_u7(self) -> Option<u8> {
        let code = match self.0 {
            0x40..=0x60 | 0x80..=0xa0 => self.0 - 0x40,
            code => code,
        };
        if code > 0x7f {
            return None;
        }
        Some(code)
    }
}
