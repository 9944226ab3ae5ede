// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

//! Bring a surface into a known state.
//!
//! All controls are activated, and after a short delay deactivated
//! again. This both tests and clears the whole surface.

use std::time::Duration;

use strum::{Display, IntoEnumIterator as _};
use thiserror::Error;

use super::{
    set_digit, set_fader_pos, set_lcd, set_lcd_c4, set_lcd_xt, set_led, set_meter, set_v_pot,
    Channel, Char, Digit, EncodeError, MeterLevel, SurfaceVariant, Switch, VPotLed, VPotMode,
    FADER_MAX, FADER_MIN, LCD_C4_ROW_LEN, LCD_LINE_LEN, LEN_C4_ROWS, LEN_LINES,
};
use crate::{LedState, Message, MidiOutputConnection, OutputError};

#[cfg(test)]
mod tests;

/// Delay between both phases.
///
/// Some surfaces drop messages if switched from fully lit
/// to fully blank too quickly.
pub const RESET_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Blocks the calling thread.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

impl<F> Sleeper for F
where
    F: FnMut(Duration),
{
    fn sleep(&mut self, duration: Duration) {
        self(duration);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResetPhase {
    /// All controls on
    Activate,
    /// All controls off
    Deactivate,
}

#[derive(Debug, Error)]
pub enum ResetError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("{phase} phase aborted at message {index}: {source}")]
    Send {
        phase: ResetPhase,
        index: usize,
        #[source]
        source: OutputError,
    },
}

const ACTIVATE_METER_LEVELS: &[MeterLevel] = &[MeterLevel::Clipping];

// Both the overload LED and the level need to be cleared
const DEACTIVATE_METER_LEVELS: &[MeterLevel] = &[MeterLevel::ClipOff, MeterLevel::LessThan60];

fn blank_lcd_messages(variant: SurfaceVariant) -> Result<Vec<Message>, EncodeError> {
    #[allow(clippy::cast_possible_truncation)]
    let line_offsets = (0..LEN_LINES).map(|line| (line * LCD_LINE_LEN) as u8);
    let blank_line = " ".repeat(LCD_LINE_LEN);
    match variant {
        SurfaceVariant::MackieControl => line_offsets
            .map(|offset| set_lcd(offset, &blank_line))
            .collect(),
        SurfaceVariant::MackieControlXt => line_offsets
            .map(|offset| set_lcd_xt(offset, &blank_line))
            .collect(),
        SurfaceVariant::MackieC4 => {
            let blank_row = " ".repeat(LCD_C4_ROW_LEN);
            #[allow(clippy::cast_possible_truncation)]
            let rows = (0..LEN_C4_ROWS).map(|row| row as u8);
            rows.map(|row| set_lcd_c4(0, row, &blank_row)).collect()
        }
    }
}

/// All messages of a single phase in the order in which they are sent.
///
/// Messages are grouped by control: LEDs, faders, V-Pots, meters,
/// digits, and finally one message per line of the LCD.
pub fn reset_messages(
    variant: SurfaceVariant,
    phase: ResetPhase,
) -> Result<Vec<Message>, EncodeError> {
    let (led_state, fader_pos, v_pot_mode, v_pot_led, meter_levels, digit_char) = match phase {
        ResetPhase::Activate => (
            LedState::On,
            FADER_MAX,
            VPotMode::Spread,
            VPotLed::CENTER.with_dot(),
            ACTIVATE_METER_LEVELS,
            Char::DIGIT_0.with_dot(),
        ),
        ResetPhase::Deactivate => (
            LedState::Off,
            FADER_MIN,
            VPotMode::Dot,
            VPotLed::OFF,
            DEACTIVATE_METER_LEVELS,
            Char::SPACE,
        ),
    };
    let mut messages = Vec::new();
    messages.extend(Switch::iter().map(|switch| set_led(switch, led_state)));
    for channel in Channel::iter() {
        messages.push(set_fader_pos(channel, fader_pos)?);
    }
    for channel in Channel::strips() {
        messages.push(set_v_pot(channel, v_pot_mode, v_pot_led)?);
    }
    for &level in meter_levels {
        messages.extend(Channel::strips().filter_map(|channel| set_meter(channel, level)));
    }
    for digit in Digit::iter() {
        messages.push(set_digit(digit, digit_char)?);
    }
    messages.extend(blank_lcd_messages(variant)?);
    Ok(messages)
}

fn send_phase<C>(
    connection: &mut C,
    phase: ResetPhase,
    messages: &[Message],
) -> Result<(), ResetError>
where
    C: MidiOutputConnection + ?Sized,
{
    log::debug!(
        "Reset phase {phase}: Sending {count} messages",
        count = messages.len()
    );
    for (index, message) in messages.iter().enumerate() {
        connection
            .send_midi_message(message)
            .map_err(|source| ResetError::Send {
                phase,
                index,
                source,
            })?;
    }
    Ok(())
}

/// Reset a Mackie Control main unit.
///
/// See [`reset_variant()`].
pub fn reset<C, S>(connection: &mut C, sleeper: &mut S) -> Result<(), ResetError>
where
    C: MidiOutputConnection + ?Sized,
    S: Sleeper + ?Sized,
{
    reset_variant(connection, SurfaceVariant::MackieControl, sleeper)
}

/// Reset all controls of a surface.
///
/// Sends all messages of [`ResetPhase::Activate`], waits for
/// [`RESET_SETTLE_DELAY`], and then sends all messages of
/// [`ResetPhase::Deactivate`].
///
/// Aborts on the first error. The second phase is never started
/// if the first phase failed. No messages are resent.
pub fn reset_variant<C, S>(
    connection: &mut C,
    variant: SurfaceVariant,
    sleeper: &mut S,
) -> Result<(), ResetError>
where
    C: MidiOutputConnection + ?Sized,
    S: Sleeper + ?Sized,
{
    log::info!("Resetting {variant}");
    let messages = reset_messages(variant, ResetPhase::Activate)?;
    send_phase(connection, ResetPhase::Activate, &messages)?;
    log::debug!("Settling for {RESET_SETTLE_DELAY:?}");
    sleeper.sleep(RESET_SETTLE_DELAY);
    let messages = reset_messages(variant, ResetPhase::Deactivate)?;
    send_phase(connection, ResetPhase::Deactivate, &messages)?;
    Ok(())
}
