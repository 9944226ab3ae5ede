// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use derive_more::{From, Into};
use strum::{EnumCount, EnumIter, FromRepr};

/// Display style of the LED ring around a V-Pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum VPotMode {
    /// A single LED
    Dot = 0x00,
    /// Bar from the center to the position
    BoostCut = 0x10,
    /// Bar from the left to the position
    Wrap = 0x20,
    /// Bar spreading from the center in both directions
    Spread = 0x30,
}

impl VPotMode {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Position of the lit segment(s) of the LED ring.
///
/// Positions range from 1 (left) to 11 (right). The LED
/// below the ring is lit independently by adding [`VPotLed::DOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct VPotLed(u8);

impl VPotLed {
    /// All segments of the ring are off.
    pub const OFF: Self = Self(0x00);

    pub const LEFT: Self = Self(0x01);

    pub const CENTER: Self = Self(0x06);

    pub const RIGHT: Self = Self(0x0b);

    /// The LED below the ring
    pub const DOT: u8 = 0x40;

    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns `None` if the position is out of range.
    #[must_use]
    pub const fn from_position(position: u8) -> Option<Self> {
        if position > Self::RIGHT.0 {
            return None;
        }
        Some(Self(position))
    }

    #[must_use]
    pub const fn with_dot(self) -> Self {
        Self(self.0 | Self::DOT)
    }

    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}
