// SPDX-FileCopyrightText: The mcuio authors
// SPDX-License-Identifier: MPL-2.0

use std::{cell::RefCell, rc::Rc};

use strum::IntoEnumIterator as _;

use super::*;
use crate::{
    devices::mackie_control::{HEADER_XT, LEN_CHANNELS, LEN_DIGITS, LEN_IDS},
    midi::testing::RecordingOutputConnection,
    OutputResult,
};

const ACTIVATE_LEN: usize =
    LEN_IDS + LEN_CHANNELS + 2 * (LEN_CHANNELS - 1) + LEN_DIGITS + LEN_LINES;

// Meters are cleared twice
const DEACTIVATE_LEN: usize = ACTIVATE_LEN + (LEN_CHANNELS - 1);

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Sent(Vec<u8>),
    Slept(Duration),
}

/// Records the interleaving of sending and sleeping.
#[derive(Debug, Clone, Default)]
struct EventLog(Rc<RefCell<Vec<Event>>>);

impl MidiOutputConnection for EventLog {
    fn send_midi_output(&mut self, output: &[u8]) -> OutputResult<()> {
        self.0.borrow_mut().push(Event::Sent(output.to_vec()));
        Ok(())
    }
}

impl Sleeper for EventLog {
    fn sleep(&mut self, duration: Duration) {
        self.0.borrow_mut().push(Event::Slept(duration));
    }
}

#[test]
fn phase_lengths() {
    assert_eq!(155, ACTIVATE_LEN);
    assert_eq!(163, DEACTIVATE_LEN);
    assert_eq!(
        ACTIVATE_LEN,
        reset_messages(SurfaceVariant::MackieControl, ResetPhase::Activate)
            .unwrap()
            .len()
    );
    assert_eq!(
        DEACTIVATE_LEN,
        reset_messages(SurfaceVariant::MackieControl, ResetPhase::Deactivate)
            .unwrap()
            .len()
    );
}

#[test]
fn sleep_between_phases() {
    let mut connection = EventLog::default();
    let mut sleeper = connection.clone();
    reset(&mut connection, &mut sleeper).unwrap();
    let events = connection.0.borrow();
    assert_eq!(ACTIVATE_LEN + 1 + DEACTIVATE_LEN, events.len());
    assert_eq!(Event::Slept(RESET_SETTLE_DELAY), events[ACTIVATE_LEN]);
    assert!(RESET_SETTLE_DELAY >= Duration::from_millis(100));
    assert_eq!(
        1,
        events
            .iter()
            .filter(|event| matches!(event, Event::Slept(_)))
            .count()
    );
}

#[test]
fn phases_are_grouped_by_control() {
    let messages = reset_messages(SurfaceVariant::MackieControl, ResetPhase::Activate).unwrap();
    let (leds, messages) = messages.split_at(LEN_IDS);
    assert!(leds
        .iter()
        .zip(Switch::iter())
        .all(|(msg, switch)| *msg == set_led(switch, LedState::On)));
    let (faders, messages) = messages.split_at(LEN_CHANNELS);
    assert!(faders
        .iter()
        .all(|msg| matches!(msg, Message::PitchBend { value: 8191, .. })));
    let (v_pots, messages) = messages.split_at(LEN_CHANNELS - 1);
    assert!(v_pots
        .iter()
        .all(|msg| matches!(msg, Message::ControlChange { value: 0x76, .. })));
    let (meters, messages) = messages.split_at(LEN_CHANNELS - 1);
    assert!(meters.iter().all(
        |msg| matches!(msg, Message::ChannelPressure { pressure, .. } if pressure & 0x0f == 0x0e)
    ));
    let (digits, lcd_lines) = messages.split_at(LEN_DIGITS);
    assert!(digits.iter().all(|msg| matches!(
        msg,
        Message::ControlChange {
            channel: 15,
            value: 0x70,
            ..
        }
    )));
    assert_eq!(
        vec![
            set_lcd(0, &" ".repeat(LCD_LINE_LEN)).unwrap(),
            set_lcd(56, &" ".repeat(LCD_LINE_LEN)).unwrap(),
        ],
        lcd_lines
    );
}

#[test]
fn deactivate_clears_meters_twice() {
    let messages =
        reset_messages(SurfaceVariant::MackieControl, ResetPhase::Deactivate).unwrap();
    let meters = messages
        .iter()
        .filter_map(|msg| match msg {
            Message::ChannelPressure { pressure, .. } => Some(*pressure),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(2 * (LEN_CHANNELS - 1), meters.len());
    let (clip_off, less_than_60) = meters.split_at(LEN_CHANNELS - 1);
    assert!(clip_off.iter().all(|pressure| pressure & 0x0f == 0x0f));
    assert!(less_than_60.iter().all(|pressure| pressure & 0x0f == 0x00));
    assert!(messages.iter().any(|msg| *msg == set_led(Switch::Play, LedState::Off)));
    assert!(messages
        .iter()
        .any(|msg| matches!(msg, Message::PitchBend { value: -8191, .. })));
}

#[test]
fn lcd_lines_of_other_variants() {
    let messages =
        reset_messages(SurfaceVariant::MackieControlXt, ResetPhase::Activate).unwrap();
    assert_eq!(ACTIVATE_LEN, messages.len());
    assert!(matches!(
        messages.last(),
        Some(Message::SysEx(payload)) if payload.starts_with(&HEADER_XT)
    ));
    let messages = reset_messages(SurfaceVariant::MackieC4, ResetPhase::Deactivate).unwrap();
    assert_eq!(DEACTIVATE_LEN - LEN_LINES + LEN_C4_ROWS, messages.len());
    assert!(matches!(
        messages.last(),
        Some(Message::SysEx(payload)) if payload.starts_with(&[0x00, 0x00, 0x66, 0x17, 0x33])
    ));
}

#[test]
fn failure_in_first_phase_skips_second_phase() {
    for fail_at in [0, 1, ACTIVATE_LEN - 1] {
        let mut connection = RecordingOutputConnection::failing_at(fail_at);
        let mut slept = Vec::new();
        let err = reset(&mut connection, &mut |duration: Duration| {
            slept.push(duration);
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ResetError::Send {
                phase: ResetPhase::Activate,
                index,
                ..
            } if index == fail_at
        ));
        assert_eq!(fail_at, connection.sent.len());
        assert!(slept.is_empty());
    }
}

#[test]
fn failure_in_second_phase_aborts() {
    let mut connection = RecordingOutputConnection::failing_at(ACTIVATE_LEN + 3);
    let mut slept = Vec::new();
    let err = reset(&mut connection, &mut |duration: Duration| {
        slept.push(duration);
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ResetError::Send {
            phase: ResetPhase::Deactivate,
            index: 3,
            ..
        }
    ));
    assert_eq!(ACTIVATE_LEN + 3, connection.sent.len());
    assert_eq!(vec![RESET_SETTLE_DELAY], slept);
}

#[test]
fn gateway_reset() {
    let mut gateway = crate::devices::mackie_control::OutputGateway::attach(
        RecordingOutputConnection::default(),
    );
    gateway
        .reset(SurfaceVariant::MackieControl, &mut |_: Duration| {})
        .unwrap();
    assert_eq!(
        ACTIVATE_LEN + DEACTIVATE_LEN,
        gateway.detach().unwrap().sent.len()
    );
}
