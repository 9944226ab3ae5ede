// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

//! Mackie Control Universal (MCU) protocol.
//!
//! Covers the main unit, the XT extender and the C4 surface.

use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::MidiDeviceDescriptor;

mod display;
pub use self::display::{
    Char, Digit, LCD_C4_ROW_LEN, LCD_LEN, LCD_LINE_LEN, LEN_C4_ROWS, LEN_DIGITS, LEN_LINES,
};

mod header;
pub use self::header::{SurfaceVariant, SysExCommand, HEADER, HEADER_C4, HEADER_XT};

mod input;
pub use self::input::{try_decode_midi_input, Input};

mod meter;
pub use self::meter::MeterLevel;

mod output;
pub use self::output::{
    send_off, send_off_velocity, set_digit, set_fader_pos, set_lcd, set_lcd_c4, set_lcd_xt,
    set_led, set_meter, set_time_display, set_v_pot, sysex_command, EncodeError, OutputGateway,
};

mod reset;
pub use self::reset::{
    reset, reset_messages, reset_variant, ResetError, ResetPhase, Sleeper, ThreadSleeper,
    RESET_SETTLE_DELAY,
};

mod switch;
pub use self::switch::{StripButton, Switch, LEN_IDS};

mod vpot;
pub use self::vpot::{VPotLed, VPotMode};

pub const MIDI_DEVICE_DESCRIPTOR: &MidiDeviceDescriptor = &MidiDeviceDescriptor {
    vendor_name: "Mackie",
    product_name: "Mackie Control",
    port_name_prefix: "Mackie Control",
};

pub const MIDI_DEVICE_DESCRIPTOR_XT: &MidiDeviceDescriptor = &MidiDeviceDescriptor {
    vendor_name: "Mackie",
    product_name: "Mackie Control XT",
    port_name_prefix: "Mackie Control XT",
};

pub const MIDI_DEVICE_DESCRIPTOR_C4: &MidiDeviceDescriptor = &MidiDeviceDescriptor {
    vendor_name: "Mackie",
    product_name: "Mackie C4",
    port_name_prefix: "Mackie C4",
};

/// Descriptors of all surface variants for auto-detection.
///
/// The port name prefix of the main unit is also a prefix of the XT.
/// Use [`MidiDeviceDescriptor::detect()`] to pick the most specific one.
pub const MIDI_DEVICE_DESCRIPTORS: &[&MidiDeviceDescriptor] = &[
    MIDI_DEVICE_DESCRIPTOR_XT,
    MIDI_DEVICE_DESCRIPTOR_C4,
    MIDI_DEVICE_DESCRIPTOR,
];

pub const LEN_CHANNELS: usize = Channel::COUNT;

/// Fader position at the bottom
pub const FADER_MIN: u16 = 0;

/// Fader position at the center, i.e. a pitch bend value of 0
pub const FADER_CENTER: u16 = 8191;

/// Fader position at the top
pub const FADER_MAX: u16 = 16382;

/// Selects which fader, meter or V-Pot should be modified.
///
/// The discriminant is the strip index. All wire fields are derived
/// from it by the conversion functions below.
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
pub enum Channel {
    Channel1,
    Channel2,
    Channel3,
    Channel4,
    Channel5,
    Channel6,
    Channel7,
    Channel8,
    /// Only a fader. Setting its V-Pot has no effect, setting its
    /// meter sends nothing.
    Master,
}

impl Channel {
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    #[must_use]
    pub const fn is_master(self) -> bool {
        matches!(self, Self::Master)
    }

    /// All channel strips, i.e. all channels except [`Channel::Master`].
    pub fn strips() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter().filter(|channel| !channel.is_master())
    }

    /// MIDI channel of the pitch bend messages that move the fader.
    #[must_use]
    pub const fn fader_midi_channel(self) -> u8 {
        self.index()
    }

    /// Controller number for setting the LED ring around the V-Pot.
    #[must_use]
    pub const fn v_pot_led_ring_controller(self) -> u8 {
        0x30 + self.index()
    }

    /// Controller number of the V-Pot rotation received from the surface.
    #[must_use]
    pub const fn v_pot_rotation_controller(self) -> Option<u8> {
        if self.is_master() {
            return None;
        }
        Some(0x10 + self.index())
    }

    /// Inverse of [`Self::v_pot_rotation_controller()`].
    #[must_use]
    pub const fn from_v_pot_rotation_controller(controller: u8) -> Option<Self> {
        match controller {
            0x10..=0x17 => Self::from_repr(controller - 0x10),
            _ => None,
        }
    }

    /// The strip index in the upper nibble of a meter message.
    ///
    /// Returns `None` for [`Channel::Master`] that has no meter. Its
    /// index would set the most significant bit of the data byte.
    #[must_use]
    pub const fn meter_nibble(self) -> Option<u8> {
        if self.is_master() {
            return None;
        }
        Some(self.index() << 4)
    }

    /// Button of this channel strip.
    ///
    /// Returns `None` for [`Channel::Master`] that has no strip buttons.
    #[must_use]
    pub fn switch(self, button: StripButton) -> Option<Switch> {
        if self.is_master() {
            return None;
        }
        Switch::from_id(button.first_switch().id() + self.index())
    }

    /// Touch sensor of the motorized fader.
    #[must_use]
    pub fn fader_touch_switch(self) -> Switch {
        Switch::from_id(Switch::FaderTouch1.id() + self.index()).unwrap_or(Switch::FaderTouchMaster)
    }
}
