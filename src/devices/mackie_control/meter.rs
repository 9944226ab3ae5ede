// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use strum::{EnumCount, EnumIter, FromRepr};

use super::EncodeError;

/// Level of a channel meter in dBFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum MeterLevel {
    LessThan60 = 0x0,
    MoreThan60 = 0x1,
    MoreThan50 = 0x2,
    MoreThan40 = 0x3,
    MoreThan30 = 0x4,
    MoreThan20 = 0x5,
    MoreThan14 = 0x6,
    MoreThan10 = 0x7,
    MoreThan8 = 0x8,
    MoreThan6 = 0x9,
    MoreThan4 = 0xa,
    MoreThan2 = 0xb,
    MoreThan0 = 0xc,
    /// Light the overload LED.
    Clipping = 0xe,
    /// Clear the overload LED.
    ClipOff = 0xf,
}

impl MeterLevel {
    /// The lower nibble of a meter message
    #[must_use]
    pub const fn to_u4(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MeterLevel {
    type Error = EncodeError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_repr(level).ok_or(EncodeError::MeterLevelOutOfRange { level })
    }
}
