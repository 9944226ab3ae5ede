// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Number of addressable switches
pub const LEN_IDS: usize = Switch::COUNT;

/// A button and/or LED, addressed by its note number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum Switch {
    // Record arm buttons of the channel strips
    RecordArm1 = 0x00,
    RecordArm2,
    RecordArm3,
    RecordArm4,
    RecordArm5,
    RecordArm6,
    RecordArm7,
    RecordArm8,

    Solo1 = 0x08,
    Solo2,
    Solo3,
    Solo4,
    Solo5,
    Solo6,
    Solo7,
    Solo8,

    Mute1 = 0x10,
    Mute2,
    Mute3,
    Mute4,
    Mute5,
    Mute6,
    Mute7,
    Mute8,

    Select1 = 0x18,
    Select2,
    Select3,
    Select4,
    Select5,
    Select6,
    Select7,
    Select8,

    // Pressing the V-Pot knobs
    VPotPress1 = 0x20,
    VPotPress2,
    VPotPress3,
    VPotPress4,
    VPotPress5,
    VPotPress6,
    VPotPress7,
    VPotPress8,

    // Assignment
    AssignTrack = 0x28,
    AssignSend,
    AssignPan,
    AssignPlugin,
    AssignEq,
    AssignInstrument,

    // Fader banks and views
    BankLeft = 0x2e,
    BankRight,
    ChannelLeft,
    ChannelRight,
    Flip,
    GlobalView,

    // Display
    NameValue = 0x34,
    SmpteBeats,

    // Function keys
    F1 = 0x36,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,

    // Global view filters
    MidiTracks = 0x3e,
    Inputs,
    AudioTracks,
    AudioInstrument,
    Aux,
    Busses,
    Outputs,
    User,

    // Modifiers
    Shift = 0x46,
    Option,
    Control,
    Alt,

    // Automation
    Read = 0x4a,
    Write,
    Trim,
    Touch,
    Latch,
    Group,

    // Utilities
    Save = 0x50,
    Undo,
    Cancel,
    Enter,

    // Transport
    Marker = 0x54,
    Nudge,
    Cycle,
    Drop,
    Replace,
    Click,
    SoloGlobal,
    Rewind,
    FastForward,
    Stop,
    Play,
    Record,

    // Cursor keys
    Up = 0x60,
    Down,
    Left,
    Right,
    Zoom,
    Scrub,

    // Foot switches
    UserA = 0x66,
    UserB,

    // Touch sensors of the motorized faders (input only)
    FaderTouch1 = 0x68,
    FaderTouch2,
    FaderTouch3,
    FaderTouch4,
    FaderTouch5,
    FaderTouch6,
    FaderTouch7,
    FaderTouch8,
    FaderTouchMaster,

    // Indicator LEDs (output only)
    SmpteLed = 0x71,
    BeatsLed,
    RudeSoloLed,
}

impl Switch {
    /// Note number
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        Self::from_repr(id)
    }
}

/// The buttons that every channel strip provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StripButton {
    RecordArm,
    Solo,
    Mute,
    Select,
    VPotPress,
}

impl StripButton {
    /// The switch of the first channel strip.
    #[must_use]
    pub const fn first_switch(self) -> Switch {
        match self {
            Self::RecordArm => Switch::RecordArm1,
            Self::Solo => Switch::Solo1,
            Self::Mute => Switch::Mute1,
            Self::Select => Switch::Select1,
            Self::VPotPress => Switch::VPotPress1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn note_numbers_are_contiguous() {
        assert_eq!(0x74, LEN_IDS);
        for (id, switch) in Switch::iter().enumerate() {
            assert_eq!(id, usize::from(switch.id()));
            assert_eq!(Some(switch), Switch::from_id(switch.id()));
        }
        assert_eq!(None, Switch::from_id(0x74));
    }

    #[test]
    fn well_known_note_numbers() {
        assert_eq!(0x10, Switch::Mute1.id());
        assert_eq!(0x28, Switch::AssignTrack.id());
        assert_eq!(0x32, Switch::Flip.id());
        assert_eq!(0x36, Switch::F1.id());
        assert_eq!(0x46, Switch::Shift.id());
        assert_eq!(0x5e, Switch::Play.id());
        assert_eq!(0x5f, Switch::Record.id());
        assert_eq!(0x65, Switch::Scrub.id());
        assert_eq!(0x68, Switch::FaderTouch1.id());
        assert_eq!(0x70, Switch::FaderTouchMaster.id());
        assert_eq!(0x73, Switch::RudeSoloLed.id());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Ok(Switch::Play), Switch::from_str("Play"));
        assert_eq!("RecordArm1", <&'static str>::from(Switch::RecordArm1));
        assert!(Switch::from_str("Pause").is_err());
    }
}
