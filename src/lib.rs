// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

#![allow(rustdoc::invalid_rust_codeblocks)]
#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(rustdoc::broken_intra_doc_links)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]

pub mod devices;

pub mod midi;
#[cfg(feature = "midir")]
pub use self::midi::midir::{MidiPortError, MidirDeviceManager, MidirOutputPort};
pub use self::midi::{Message, MidiDeviceDescriptor, MidiInputDecodeError, MidiOutputConnection};

mod output;
pub use self::output::{Error as OutputError, LedState, Result as OutputResult};
