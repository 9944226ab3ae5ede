// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("disconnected")]
    Disconnected,
    #[error("Send: {msg}")]
    Send { msg: Cow<'static, str> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Switch LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    Off,
    /// Blinking is driven by the surface itself.
    Blink,
    On,
}

impl LedState {
    /// Note velocity of the LED state
    #[must_use]
    pub const fn to_u7(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::Blink => 0x01,
            Self::On => 0x7f,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}
