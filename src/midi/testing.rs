// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use super::MidiOutputConnection;
use crate::{OutputError, OutputResult};

/// Records all output and optionally fails on a given send.
#[derive(Debug, Default)]
pub(crate) struct RecordingOutputConnection {
    pub(crate) sent: Vec<Vec<u8>>,
    pub(crate) fail_at: Option<usize>,
}

impl RecordingOutputConnection {
    pub(crate) fn failing_at(index: usize) -> Self {
        Self {
            sent: Vec::new(),
            fail_at: Some(index),
        }
    }
}

impl MidiOutputConnection for RecordingOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        if self.fail_at == Some(self.sent.len()) {
            return Err(OutputError::Send {
                msg: "unplugged".into(),
            });
        }
        self.sent.push(output.to_vec());
        Ok(())
    }
}
