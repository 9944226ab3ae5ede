// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

//! Decoding of messages received from the surface.

use super::{Channel, SurfaceVariant, Switch, FADER_CENTER, FADER_MAX};
use crate::{Message, MidiInputDecodeError};


const MIDI_JOG_WHEEL: u8 = 0x3c;

const BUTTON_PRESSED: u8 = 0x7f;
const BUTTON_RELEASED: u8 = 0x00;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A button or a fader touch sensor
    Switch { switch: Switch, pressed: bool },
    /// Fader moved by the user
    Fader { channel: Channel, position: u16 },
    /// V-Pot rotated by the given number of ticks, negative if counter-clockwise
    VPot { channel: Channel, delta: i8 },
    /// Jog wheel rotated by the given number of ticks, negative if counter-clockwise
    JogWheel { delta: i8 },
    /// Device specific message, e.g. a reply to a [`SysExCommand`](super::SysExCommand)
    SysEx {
        variant: SurfaceVariant,
        payload: Vec<u8>,
    },
}

/// Sign bit and magnitude of relative encoders.
fn u7_to_delta(value: u8) -> i8 {
    #[allow(clippy::cast_possible_wrap)]
    let ticks = (value & 0x3f) as i8;
    if value & 0x40 == 0 {
        ticks
    } else {
        -ticks
    }
}

/// Inverse of [`set_fader_pos()`](super::set_fader_pos).
fn pitch_bend_to_fader_position(value: i16) -> u16 {
    let position = i32::from(value) + i32::from(FADER_CENTER);
    u16::try_from(position.clamp(0, i32::from(FADER_MAX))).unwrap_or(FADER_MAX)
}

/// Decode a single message from the surface.
///
/// Returns `Ok(None)` for well-formed messages that do not
/// carry any input from the surface.
pub fn try_decode_midi_input(input: &[u8]) -> Result<Option<Input>, MidiInputDecodeError> {
    log::trace!("Received MIDI input: {input:02x?}");
    decode_message(input).inspect_err(|err| {
        log::warn!("Failed to decode MIDI input {input:02x?}: {err}");
    })
}

fn decode_message(input: &[u8]) -> Result<Option<Input>, MidiInputDecodeError> {
    let decoded = match Message::try_from_bytes(input)? {
        Message::NoteOn {
            channel: 0,
            note,
            velocity,
        } => {
            let switch = Switch::from_id(note).ok_or(MidiInputDecodeError)?;
            let pressed = match velocity {
                BUTTON_PRESSED => true,
                BUTTON_RELEASED => false,
                _ => return Err(MidiInputDecodeError),
            };
            Input::Switch { switch, pressed }
        }
        Message::NoteOff {
            channel: 0, note, ..
        } => {
            let switch = Switch::from_id(note).ok_or(MidiInputDecodeError)?;
            Input::Switch {
                switch,
                pressed: false,
            }
        }
        Message::PitchBend { channel, value } => {
            let channel = Channel::from_index(channel).ok_or(MidiInputDecodeError)?;
            Input::Fader {
                channel,
                position: pitch_bend_to_fader_position(value),
            }
        }
        Message::ControlChange {
            channel: 0,
            controller: MIDI_JOG_WHEEL,
            value,
        } => Input::JogWheel {
            delta: u7_to_delta(value),
        },
        Message::ControlChange {
            channel: 0,
            controller,
            value,
        } => {
            let Some(channel) = Channel::from_v_pot_rotation_controller(controller) else {
                log::debug!("Ignoring control change {controller:#04x}: {value:#04x}");
                return Ok(None);
            };
            Input::VPot {
                channel,
                delta: u7_to_delta(value),
            }
        }
        Message::SysEx(payload) => {
            let Some(variant) = SurfaceVariant::from_payload(&payload) else {
                log::debug!("Ignoring foreign SysEx message {payload:02x?}");
                return Ok(None);
            };
            Input::SysEx {
                variant,
                payload: payload[variant.header().len()..].to_vec(),
            }
        }
        message => {
            log::debug!("Ignoring {message:?}");
            return Ok(None);
        }
    };
    Ok(Some(decoded))
}
