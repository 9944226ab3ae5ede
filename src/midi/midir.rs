// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use midir::{ConnectError, InitError, MidiOutput, MidiOutputConnection, MidiOutputPort, SendError};
use thiserror::Error;

use super::MidiDeviceDescriptor;
use crate::OutputError;

const CLIENT_NAME: &str = "mcuio";

#[derive(Debug, Error)]
pub enum MidiPortError {
    #[error("no output port for \"{port_name_prefix}\"")]
    NotFound { port_name_prefix: &'static str },
    #[error(transparent)]
    Init(#[from] InitError),
    #[error(transparent)]
    ConnectOutput(#[from] ConnectError<MidiOutput>),
}

impl From<SendError> for OutputError {
    fn from(err: SendError) -> Self {
        OutputError::Send {
            msg: err.to_string().into(),
        }
    }
}

#[allow(missing_debug_implementations)]
pub struct MidirOutputPort {
    pub name: String,
    pub port: MidiOutputPort,
}

/// Discovers and connects output ports with [`midir`].
#[allow(missing_debug_implementations)]
pub struct MidirDeviceManager {
    output: MidiOutput,
}

impl MidirDeviceManager {
    pub fn new() -> Result<Self, MidiPortError> {
        let output = MidiOutput::new(CLIENT_NAME)?;
        Ok(Self { output })
    }

    pub fn output_ports(&self) -> impl Iterator<Item = MidirOutputPort> + '_ {
        self.output.ports().into_iter().filter_map(|port| {
            let name = self.output.port_name(&port).ok()?;
            log::debug!("Found MIDI output port \"{name}\"");
            Some(MidirOutputPort { name, port })
        })
    }

    /// Find the first output port that belongs to the given device.
    ///
    /// Ports that match one of the other `descriptors` more specifically
    /// are skipped.
    #[must_use]
    pub fn find_output_port(
        &self,
        descriptor: &MidiDeviceDescriptor,
        descriptors: &[&MidiDeviceDescriptor],
    ) -> Option<MidirOutputPort> {
        self.output_ports().find(|port| descriptor.is_best_match(&port.name, descriptors))
    }

    /// Detect all output ports that belong to one of the given devices.
    #[must_use]
    pub fn detect_output_ports<'d>(
        &self,
        descriptors: &[&'d MidiDeviceDescriptor],
    ) -> Vec<(&'d MidiDeviceDescriptor, MidirOutputPort)> {
        self.output_ports()
            .filter_map(|port| {
                let descriptor = MidiDeviceDescriptor::detect(descriptors, &port.name)?;
                log::debug!(
                    "Detected output port \"{port_name}\" for {vendor_name} {product_name}",
                    port_name = port.name,
                    vendor_name = descriptor.vendor_name,
                    product_name = descriptor.product_name,
                );
                Some((descriptor, port))
            })
            .collect()
    }

    /// Connect to the first output port of the given device.
    ///
    /// See [`Self::find_output_port()`].
    pub fn connect_output(
        self,
        descriptor: &MidiDeviceDescriptor,
        descriptors: &[&MidiDeviceDescriptor],
    ) -> Result<MidiOutputConnection, MidiPortError> {
        let Some(port) = self.find_output_port(descriptor, descriptors) else {
            return Err(MidiPortError::NotFound {
                port_name_prefix: descriptor.port_name_prefix,
            });
        };
        self.connect_output_port(port)
    }

    /// Connect to a detected output port.
    ///
    /// Consumes the manager, because [`MidiOutput`] is consumed when connecting.
    pub fn connect_output_port(
        self,
        port: MidirOutputPort,
    ) -> Result<MidiOutputConnection, MidiPortError> {
        let MidirOutputPort { name, port } = port;
        log::info!("Connecting output port \"{name}\"");
        let connection = self.output.connect(&port, &name)?;
        Ok(connection)
    }
}

impl super::MidiOutputConnection for MidiOutputConnection {
    fn send_midi_output(&mut self, output: &[u8]) -> crate::OutputResult<()> {
        self.send(output).map_err(Into::into)
    }
}
