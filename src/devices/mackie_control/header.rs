// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use strum::{Display, EnumIter};

/// `SysEx` header of the Mackie Control main unit
pub const HEADER: [u8; 4] = [0x00, 0x00, 0x66, 0x14];

/// `SysEx` header of the Mackie Control XT extender
pub const HEADER_XT: [u8; 4] = [0x00, 0x00, 0x66, 0x15];

/// `SysEx` header of the Mackie C4
pub const HEADER_C4: [u8; 4] = [0x00, 0x00, 0x66, 0x17];

/// The surface variant determines the `SysEx` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum SurfaceVariant {
    #[default]
    MackieControl,
    MackieControlXt,
    MackieC4,
}

impl SurfaceVariant {
    #[must_use]
    pub const fn header(self) -> &'static [u8; 4] {
        match self {
            Self::MackieControl => &HEADER,
            Self::MackieControlXt => &HEADER_XT,
            Self::MackieC4 => &HEADER_C4,
        }
    }

    /// Identify the variant from the leading bytes of a `SysEx` payload.
    #[must_use]
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let header = payload.get(..4)?;
        [Self::MackieControl, Self::MackieControlXt, Self::MackieC4]
            .into_iter()
            .find(|variant| variant.header() == header)
    }
}

/// Device commands that are framed by the `SysEx` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SysExCommand {
    /// Ask the surface to identify itself.
    Query,
    GoOffline,
    /// Request the firmware version.
    Version,
    /// Move all faders to the bottom.
    ResetFaders,
    /// Turn off all LEDs.
    ResetLeds,
    /// Reboot the surface.
    Reset,
}

impl SysExCommand {
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::Query => &[0x00],
            Self::GoOffline => &[0x0f, 0x7f],
            Self::Version => &[0x13, 0x00],
            Self::ResetFaders => &[0x61],
            Self::ResetLeds => &[0x62],
            Self::Reset => &[0x63],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn identify_variant_by_header() {
        for variant in SurfaceVariant::iter() {
            let mut payload = variant.header().to_vec();
            payload.push(0x12);
            assert_eq!(Some(variant), SurfaceVariant::from_payload(&payload));
        }
        assert_eq!(None, SurfaceVariant::from_payload(&[0x00, 0x00, 0x66]));
        assert_eq!(
            None,
            SurfaceVariant::from_payload(&[0x00, 0x00, 0x66, 0x16])
        );
    }
}
