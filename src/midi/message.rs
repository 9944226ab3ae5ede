// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use super::MidiInputDecodeError;

pub const MIDI_CMD_NOTE_OFF: u8 = 0x80;
pub const MIDI_CMD_NOTE_ON: u8 = 0x90;
pub const MIDI_CMD_CC: u8 = 0xb0;
pub const MIDI_CMD_CHANNEL_PRESSURE: u8 = 0xd0;
pub const MIDI_CMD_PITCH_BEND: u8 = 0xe0;

pub const MIDI_SYSEX_START: u8 = 0xf0;
pub const MIDI_SYSEX_END: u8 = 0xf7;

const PITCH_BEND_CENTER: i32 = 0x2000;

fn is_data(bytes: &[u8]) -> bool {
    bytes.iter().all(|byte| *byte <= 0x7f)
}

/// Channels occupy the lower nibble of the status byte and data bytes
/// must not have the status bit set.
fn debug_assert_valid_frame(channel: u8, data: &[u8]) {
    debug_assert!(channel <= 0x0f, "invalid MIDI channel {channel}");
    debug_assert!(is_data(data), "invalid MIDI data bytes {data:02x?}");
}

/// A single MIDI message.
///
/// Channel fields occupy the lower nibble of the status byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NoteOff {
        channel: u8,
        note: u8,
        velocity: u8,
    },
    NoteOn {
        channel: u8,
        note: u8,
        velocity: u8,
    },
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
    /// Also known as (monophonic) after-touch.
    ChannelPressure { channel: u8, pressure: u8 },
    /// Signed 14-bit value in the range [-8192, 8191], centered at 0.
    PitchBend { channel: u8, value: i16 },
    /// Payload between the start and end bytes.
    SysEx(Vec<u8>),
}

impl Message {
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(3);
        self.encode_into(&mut bytes);
        bytes
    }

    pub fn encode_into(&self, bytes: &mut Vec<u8>) {
        match *self {
            Self::NoteOff {
                channel,
                note,
                velocity,
            }
            | Self::NoteOn {
                channel,
                note,
                velocity,
            } => debug_assert_valid_frame(channel, &[note, velocity]),
            Self::ControlChange {
                channel,
                controller,
                value,
            } => debug_assert_valid_frame(channel, &[controller, value]),
            Self::ChannelPressure { channel, pressure } => {
                debug_assert_valid_frame(channel, &[pressure]);
            }
            Self::PitchBend { channel, .. } => debug_assert_valid_frame(channel, &[]),
            Self::SysEx(ref payload) => debug_assert_valid_frame(0, payload),
        }
        match *self {
            Self::NoteOff {
                channel,
                note,
                velocity,
            } => bytes.extend_from_slice(&[MIDI_CMD_NOTE_OFF | channel, note, velocity]),
            Self::NoteOn {
                channel,
                note,
                velocity,
            } => bytes.extend_from_slice(&[MIDI_CMD_NOTE_ON | channel, note, velocity]),
            Self::ControlChange {
                channel,
                controller,
                value,
            } => bytes.extend_from_slice(&[MIDI_CMD_CC | channel, controller, value]),
            Self::ChannelPressure { channel, pressure } => {
                bytes.extend_from_slice(&[MIDI_CMD_CHANNEL_PRESSURE | channel, pressure]);
            }
            Self::PitchBend { channel, value } => {
                debug_assert!((-8192..=8191).contains(&value));
                #[allow(clippy::cast_sign_loss)]
                let raw = (i32::from(value) + PITCH_BEND_CENTER) as u16;
                #[allow(clippy::cast_possible_truncation)]
                bytes.extend_from_slice(&[
                    MIDI_CMD_PITCH_BEND | channel,
                    (raw & 0x7f) as u8,
                    ((raw >> 7) & 0x7f) as u8,
                ]);
            }
            Self::SysEx(ref payload) => {
                bytes.reserve(payload.len() + 2);
                bytes.push(MIDI_SYSEX_START);
                bytes.extend_from_slice(payload);
                bytes.push(MIDI_SYSEX_END);
            }
        }
    }

    /// Parse a single, complete message.
    ///
    /// Running status and system real-time messages are not supported.
    pub fn try_from_bytes(input: &[u8]) -> Result<Self, MidiInputDecodeError> {
        let Some((&status, data)) = input.split_first() else {
            return Err(MidiInputDecodeError);
        };
        if status == MIDI_SYSEX_START {
            let Some((&MIDI_SYSEX_END, payload)) = data.split_last() else {
                return Err(MidiInputDecodeError);
            };
            if !is_data(payload) {
                return Err(MidiInputDecodeError);
            }
            return Ok(Self::SysEx(payload.to_vec()));
        }
        if !is_data(data) {
            return Err(MidiInputDecodeError);
        }
        let channel = status & 0x0f;
        let decoded = match (status & 0xf0, data) {
            (MIDI_CMD_NOTE_OFF, &[note, velocity]) => Self::NoteOff {
                channel,
                note,
                velocity,
            },
            (MIDI_CMD_NOTE_ON, &[note, velocity]) => Self::NoteOn {
                channel,
                note,
                velocity,
            },
            (MIDI_CMD_CC, &[controller, value]) => Self::ControlChange {
                channel,
                controller,
                value,
            },
            (MIDI_CMD_CHANNEL_PRESSURE, &[pressure]) => Self::ChannelPressure { channel, pressure },
            (MIDI_CMD_PITCH_BEND, &[lsb, msb]) => {
                let raw = i32::from(msb & 0x7f) << 7 | i32::from(lsb & 0x7f);
                #[allow(clippy::cast_possible_truncation)]
                let value = (raw - PITCH_BEND_CENTER) as i16;
                Self::PitchBend { channel, value }
            }
            _ => return Err(MidiInputDecodeError),
        };
        Ok(decoded)
    }
}
