// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

//! Encoding of output messages.
//!
//! All functions are pure. Messages are only sent by [`OutputGateway`].

use strum::IntoEnumIterator as _;
use thiserror::Error;

use super::{
    Channel, Char, Digit, MeterLevel, SurfaceVariant, SysExCommand, Switch, VPotLed, VPotMode,
    FADER_CENTER, FADER_MAX, LCD_C4_ROW_LEN, LCD_LEN, LEN_C4_ROWS,
};
use crate::{LedState, Message, MidiOutputConnection, OutputError, OutputResult};


/// LEDs, digits and V-Pot rings share the first MIDI channel.
const MIDI_CHANNEL_DEFAULT: u8 = 0;

/// The 7-segment digits are controlled on the last MIDI channel.
const MIDI_CHANNEL_DIGITS: u8 = 15;

/// `SysEx` command for writing text to the LCD of the main unit and the extender.
const SYSEX_LCD: u8 = 0x12;

/// `SysEx` command for writing text to the first row of the C4 LCD.
const SYSEX_LCD_C4_FIRST_ROW: u8 = 0x30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("fader position {position} exceeds {max}", max = FADER_MAX)]
    FaderPositionOutOfRange { position: u16 },
    #[error("V-Pot value {value:#x} exceeds a data byte")]
    VPotValueOutOfRange { value: u16 },
    #[error("meter level {level:#x} is invalid")]
    MeterLevelOutOfRange { level: u8 },
    #[error("velocity {velocity:#x} exceeds a data byte")]
    VelocityOutOfRange { velocity: u8 },
    #[error("character {code:#x} has no 7-segment encoding")]
    InvalidChar { code: u8 },
    #[error("text contains non-ASCII characters")]
    NonAsciiText,
    #[error("{len} characters at offset {offset} exceed the LCD size {capacity}")]
    LcdTextOutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
    #[error("LCD row {row} is invalid")]
    LcdRowOutOfRange { row: u8 },
}

/// Set the LED of a switch.
#[must_use]
pub const fn set_led(switch: Switch, state: LedState) -> Message {
    Message::NoteOn {
        channel: MIDI_CHANNEL_DEFAULT,
        note: switch.id(),
        velocity: state.to_u7(),
    }
}

/// Send a note off message for a switch.
#[must_use]
pub const fn send_off(switch: Switch) -> Message {
    Message::NoteOff {
        channel: MIDI_CHANNEL_DEFAULT,
        note: switch.id(),
        velocity: 0x00,
    }
}

/// Send a note off message for a switch with a custom velocity.
pub const fn send_off_velocity(switch: Switch, velocity: u8) -> Result<Message, EncodeError> {
    if velocity > 0x7f {
        return Err(EncodeError::VelocityOutOfRange { velocity });
    }
    Ok(Message::NoteOff {
        channel: MIDI_CHANNEL_DEFAULT,
        note: switch.id(),
        velocity,
    })
}

/// Move a motorized fader.
///
/// The position ranges from [`FADER_MIN`](super::FADER_MIN) (bottom)
/// to [`FADER_MAX`] (top).
pub fn set_fader_pos(channel: Channel, position: u16) -> Result<Message, EncodeError> {
    if position > FADER_MAX {
        return Err(EncodeError::FaderPositionOutOfRange { position });
    }
    let value = i16::try_from(i32::from(position) - i32::from(FADER_CENTER))
        .map_err(|_| EncodeError::FaderPositionOutOfRange { position })?;
    Ok(Message::PitchBend {
        channel: channel.fader_midi_channel(),
        value,
    })
}

/// Set the LED ring around a V-Pot.
///
/// Setting the V-Pot of [`Channel::Master`] has no effect.
pub fn set_v_pot(channel: Channel, mode: VPotMode, led: VPotLed) -> Result<Message, EncodeError> {
    let value = u16::from(mode.to_u8()) + u16::from(led.to_u8());
    let Some(value) = u8::try_from(value).ok().filter(|value| *value <= 0x7f) else {
        return Err(EncodeError::VPotValueOutOfRange { value });
    };
    if channel.is_master() {
        log::debug!("Master has no V-Pot");
    }
    Ok(Message::ControlChange {
        channel: MIDI_CHANNEL_DEFAULT,
        controller: channel.v_pot_led_ring_controller(),
        value,
    })
}

/// Set the level meter of a channel.
///
/// Returns `None` for [`Channel::Master`] that has no meter.
#[must_use]
pub fn set_meter(channel: Channel, level: MeterLevel) -> Option<Message> {
    let Some(nibble) = channel.meter_nibble() else {
        log::debug!("Master has no meter");
        return None;
    };
    Some(Message::ChannelPressure {
        channel: MIDI_CHANNEL_DEFAULT,
        pressure: nibble + level.to_u4(),
    })
}

/// Set a single digit of the timecode or assignment display.
pub const fn set_digit(digit: Digit, char: Char) -> Result<Message, EncodeError> {
    let Some(value) = char.to_u7() else {
        return Err(EncodeError::InvalidChar { code: char.code() });
    };
    Ok(Message::ControlChange {
        channel: MIDI_CHANNEL_DIGITS,
        controller: digit.controller(),
        value,
    })
}

/// Write text to the timecode display.
///
/// The text is right-aligned and truncated to the first
/// [`Digit::TIMECODE_LEN`] characters. Letters are displayed
/// in upper case.
pub fn set_time_display(text: &str) -> Result<Vec<Message>, EncodeError> {
    if !text.is_ascii() {
        return Err(EncodeError::NonAsciiText);
    }
    let text = text.as_bytes();
    let text = &text[..text.len().min(Digit::TIMECODE_LEN)];
    // The timecode digits are numbered from right to left
    text.iter()
        .rev()
        .zip(Digit::iter())
        .map(|(&ascii, digit)| set_digit(digit, Char::from_ascii(ascii)))
        .collect()
}

fn lcd_text(text: &str, offset: u8, capacity: usize) -> Result<&[u8], EncodeError> {
    if !text.is_ascii() {
        return Err(EncodeError::NonAsciiText);
    }
    let offset = usize::from(offset);
    let len = text.len();
    if offset + len > capacity {
        return Err(EncodeError::LcdTextOutOfRange {
            offset,
            len,
            capacity,
        });
    }
    Ok(text.as_bytes())
}

fn sysex(header: &[u8], frame: &[u8], text: &[u8]) -> Message {
    let mut payload = Vec::with_capacity(header.len() + frame.len() + text.len());
    payload.extend_from_slice(header);
    payload.extend_from_slice(frame);
    payload.extend_from_slice(text);
    Message::SysEx(payload)
}

/// Write ASCII text to the LCD of the main unit, starting at the given offset.
///
/// Offsets of the second line start at [`LCD_LINE_LEN`](super::LCD_LINE_LEN).
pub fn set_lcd(offset: u8, text: &str) -> Result<Message, EncodeError> {
    let text = lcd_text(text, offset, LCD_LEN)?;
    Ok(sysex(
        SurfaceVariant::MackieControl.header(),
        &[SYSEX_LCD, offset],
        text,
    ))
}

/// Write ASCII text to the LCD of an XT extender, starting at the given offset.
pub fn set_lcd_xt(offset: u8, text: &str) -> Result<Message, EncodeError> {
    let text = lcd_text(text, offset, LCD_LEN)?;
    Ok(sysex(
        SurfaceVariant::MackieControlXt.header(),
        &[SYSEX_LCD, offset],
        text,
    ))
}

/// Write ASCII text to a row of the C4 LCD, starting at the given offset.
pub fn set_lcd_c4(offset: u8, row: u8, text: &str) -> Result<Message, EncodeError> {
    if usize::from(row) >= LEN_C4_ROWS {
        return Err(EncodeError::LcdRowOutOfRange { row });
    }
    let text = lcd_text(text, offset, LCD_C4_ROW_LEN)?;
    Ok(sysex(
        SurfaceVariant::MackieC4.header(),
        &[SYSEX_LCD_C4_FIRST_ROW + row, offset],
        text,
    ))
}

#[must_use]
pub fn sysex_command(variant: SurfaceVariant, command: SysExCommand) -> Message {
    sysex(variant.header(), command.bytes(), &[])
}

#[derive(Debug)]
pub struct OutputGateway<C> {
    midi_output_connection: Option<C>,
}

impl<C> Default for OutputGateway<C> {
    fn default() -> Self {
        Self {
            midi_output_connection: None,
        }
    }
}

impl<C: MidiOutputConnection> OutputGateway<C> {
    #[must_use]
    pub const fn attach(midi_output_connection: C) -> Self {
        Self {
            midi_output_connection: Some(midi_output_connection),
        }
    }

    pub fn detach(&mut self) -> Option<C> {
        self.midi_output_connection.take()
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.midi_output_connection.is_some()
    }

    pub fn send_message(&mut self, message: &Message) -> OutputResult<()> {
        let Some(midi_output_connection) = &mut self.midi_output_connection else {
            return Err(OutputError::Disconnected);
        };
        midi_output_connection.send_midi_message(message)
    }

    /// Send multiple messages in order.
    ///
    /// Stops at the first error.
    pub fn send_messages<'m>(
        &mut self,
        messages: impl IntoIterator<Item = &'m Message>,
    ) -> OutputResult<()> {
        for message in messages {
            self.send_message(message)?;
        }
        Ok(())
    }

    pub fn send_led_output(&mut self, switch: Switch, state: LedState) -> OutputResult<()> {
        self.send_message(&set_led(switch, state))
    }

    /// Reset the attached surface.
    ///
    /// See [`reset_variant()`](super::reset_variant).
    pub fn reset(
        &mut self,
        variant: SurfaceVariant,
        sleeper: &mut impl super::Sleeper,
    ) -> Result<(), super::ResetError> {
        let Some(midi_output_connection) = &mut self.midi_output_connection else {
            return Err(super::ResetError::Send {
                phase: super::ResetPhase::Activate,
                index: 0,
                source: OutputError::Disconnected,
            });
        };
        super::reset_variant(midi_output_connection, variant, sleeper)
    }
}
