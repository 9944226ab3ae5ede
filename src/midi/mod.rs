// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use crate::OutputResult;

mod message;
pub use self::message::{
    Message, MIDI_CMD_CC, MIDI_CMD_CHANNEL_PRESSURE, MIDI_CMD_NOTE_OFF, MIDI_CMD_NOTE_ON,
    MIDI_CMD_PITCH_BEND, MIDI_SYSEX_END, MIDI_SYSEX_START,
};

#[cfg(feature = "midir")]
pub(crate) mod midir;

#[cfg(test)]
pub(crate) mod testing;

/// MIDI device identification
///
/// Used for detecting the ports of a device by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiDeviceDescriptor {
    pub vendor_name: &'static str,
    pub product_name: &'static str,
    pub port_name_prefix: &'static str,
}

impl MidiDeviceDescriptor {
    #[must_use]
    pub fn matches_port_name(&self, port_name: &str) -> bool {
        port_name.starts_with(self.port_name_prefix)
    }

    /// Check that no other descriptor matches the port name more specifically.
    ///
    /// A longer matching prefix takes precedence, e.g. "Mackie Control XT"
    /// over "Mackie Control".
    #[must_use]
    pub fn is_best_match(&self, port_name: &str, descriptors: &[&Self]) -> bool {
        self.matches_port_name(port_name)
            && descriptors.iter().all(|other| {
                !other.matches_port_name(port_name)
                    || other.port_name_prefix.len() <= self.port_name_prefix.len()
            })
    }

    /// The most specific descriptor for a port name.
    #[must_use]
    pub fn detect<'d>(descriptors: &[&'d Self], port_name: &str) -> Option<&'d Self> {
        descriptors
            .iter()
            .copied()
            .filter(|descriptor| descriptor.matches_port_name(port_name))
            .max_by_key(|descriptor| descriptor.port_name_prefix.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("undecodable MIDI input")]
pub struct MidiInputDecodeError;

/// Sink for raw MIDI output.
///
/// The transport is responsible for serializing concurrent sends.
pub trait MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()>;

    /// Encode and send a single message.
    fn send_midi_message(&mut self, message: &Message) -> OutputResult<()> {
        let output = message.to_bytes();
        log::trace!("Sending MIDI output: {output:02x?}");
        self.send_midi_output(&output)
    }
}

impl<C> MidiOutputConnection for &mut C
where
    C: MidiOutputConnection + ?Sized,
{
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        (**self).send_midi_output(output)
    }
}

impl<C> MidiOutputConnection for Box<C>
where
    C: MidiOutputConnection + ?Sized,
{
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        (**self).send_midi_output(output)
    }
}
