// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use rstest::{fixture, rstest};

use super::{Playback, PlaybackState, Speed, TickOutcome};

#[fixture]
fn five_steps() -> Playback {
    Playback::new(5, Speed::Normal)
}

fn play_to_end(playback: &mut Playback) -> usize {
    let mut handle = playback.play().expect("first handle");
    let mut ticks = 0;
    loop {
        ticks += 1;
        match playback.tick(handle) {
            TickOutcome::Advanced(next) => handle = next,
            TickOutcome::Finished => return ticks,
            TickOutcome::Stale => panic!("live handle rejected"),
        }
    }
}

#[rstest]
fn starts_stopped_at_the_first_step(five_steps: Playback) {
    assert_eq!(five_steps.cursor(), Some(0));
    assert_eq!(five_steps.state(), PlaybackState::Stopped);
    assert_eq!(five_steps.status_line(), "Step 1 of 5");
}

#[rstest]
fn auto_play_stops_at_the_last_step(mut five_steps: Playback) {
    let ticks = play_to_end(&mut five_steps);

    assert_eq!(ticks, 4);
    assert_eq!(five_steps.cursor(), Some(4));
    assert_eq!(five_steps.state(), PlaybackState::Stopped);
    assert_eq!(five_steps.pending(), None);
    assert_eq!(five_steps.status_line(), "Step 5 of 5");
}

#[rstest]
fn play_at_the_last_step_stops_immediately(mut five_steps: Playback) {
    five_steps.jump_to_end();
    assert_eq!(five_steps.state(), PlaybackState::Paused);

    assert_eq!(five_steps.play(), None);
    assert_eq!(five_steps.state(), PlaybackState::Stopped);
    assert_eq!(five_steps.cursor(), Some(4));
}

#[rstest]
fn manual_steps_cancel_outstanding_ticks(mut five_steps: Playback) {
    let handle = five_steps.play().expect("handle");
    five_steps.step_forward();

    assert_eq!(five_steps.state(), PlaybackState::Paused);
    assert_eq!(five_steps.cursor(), Some(1));
    assert_eq!(five_steps.tick(handle), TickOutcome::Stale);
    assert_eq!(five_steps.cursor(), Some(1));
}

#[rstest]
fn a_tick_from_an_earlier_play_session_is_stale(mut five_steps: Playback) {
    let old = five_steps.play().expect("handle");
    five_steps.pause();
    let fresh = five_steps.play().expect("handle");

    assert_ne!(old, fresh);
    assert_eq!(five_steps.tick(old), TickOutcome::Stale);
    assert_eq!(five_steps.cursor(), Some(0));
    assert!(matches!(five_steps.tick(fresh), TickOutcome::Advanced(_)));
    assert_eq!(five_steps.cursor(), Some(1));
}

#[rstest]
fn step_and_jump_clamp_to_the_sequence(mut five_steps: Playback) {
    five_steps.step_back();
    assert_eq!(five_steps.cursor(), Some(0));
    assert_eq!(five_steps.state(), PlaybackState::Paused);

    for _ in 0..10 {
        five_steps.step_forward();
    }
    assert_eq!(five_steps.cursor(), Some(4));

    five_steps.seek(99);
    assert_eq!(five_steps.cursor(), Some(4));
    five_steps.seek(2);
    assert_eq!(five_steps.cursor(), Some(2));
}

#[rstest]
fn reset_returns_to_the_first_step(mut five_steps: Playback) {
    let handle = five_steps.play().expect("handle");
    let _ = five_steps.tick(handle);
    five_steps.reset();

    assert_eq!(five_steps.cursor(), Some(0));
    assert_eq!(five_steps.state(), PlaybackState::Stopped);
    assert_eq!(five_steps.pending(), None);
}

#[rstest]
fn toggle_alternates_between_playing_and_paused(mut five_steps: Playback) {
    assert!(five_steps.toggle().is_some());
    assert_eq!(five_steps.state(), PlaybackState::Playing);
    assert!(five_steps.toggle().is_none());
    assert_eq!(five_steps.state(), PlaybackState::Paused);
}

#[rstest]
fn pause_only_affects_playing_state(mut five_steps: Playback) {
    five_steps.pause();
    assert_eq!(five_steps.state(), PlaybackState::Stopped);
}

#[rstest]
fn speed_changes_keep_state_and_cursor(mut five_steps: Playback) {
    let handle = five_steps.play().expect("handle");
    let TickOutcome::Advanced(handle) = five_steps.tick(handle) else {
        panic!("expected an advance");
    };
    assert_eq!(handle.interval(), Duration::from_millis(1000));

    let faster = five_steps.cycle_speed().expect("rescheduled");
    assert_eq!(five_steps.speed(), Speed::Double);
    assert_eq!(five_steps.state(), PlaybackState::Playing);
    assert_eq!(five_steps.cursor(), Some(1));
    assert_eq!(faster.interval(), Duration::from_millis(500));
    assert_eq!(five_steps.tick(handle), TickOutcome::Stale);

    five_steps.pause();
    assert_eq!(five_steps.set_speed(Speed::Half), None);
    assert_eq!(five_steps.state(), PlaybackState::Paused);
    assert_eq!(five_steps.cursor(), Some(1));
}

#[test]
fn speed_cycle_order() {
    assert_eq!(Speed::Normal.next(), Speed::Double);
    assert_eq!(Speed::Double.next(), Speed::Half);
    assert_eq!(Speed::Half.next(), Speed::Normal);
}

#[rstest]
#[case("1x", Speed::Normal)]
#[case("2x", Speed::Double)]
#[case("0.5x", Speed::Half)]
fn parses_speed_labels(#[case] raw: &str, #[case] expected: Speed) {
    assert_eq!(raw.parse::<Speed>().expect("speed"), expected);
    assert_eq!(expected.to_string(), raw);
    assert_eq!(serde_json::to_string(&expected).unwrap(), format!("\"{raw}\""));
}

#[test]
fn replace_forces_a_reset_for_the_new_sequence() {
    let mut playback = Playback::new(3, Speed::Double);
    playback.jump_to_end();

    playback.replace(7);
    assert_eq!(playback.step_count(), 7);
    assert_eq!(playback.cursor(), Some(0));
    assert_eq!(playback.state(), PlaybackState::Stopped);
    assert_eq!(playback.speed(), Speed::Double);
}

#[test]
fn empty_sequences_make_every_transition_a_no_op() {
    let mut playback = Playback::new(0, Speed::Normal);

    assert_eq!(playback.play(), None);
    playback.step_forward();
    playback.step_back();
    playback.jump_to_end();
    playback.seek(3);
    assert_eq!(playback.toggle(), None);

    assert_eq!(playback.cursor(), None);
    assert_eq!(playback.state(), PlaybackState::Stopped);
    assert_eq!(playback.status_line(), "Step 0 of 0");
}

#[test]
fn single_step_sequences_never_start_playing() {
    let mut playback = Playback::new(1, Speed::Normal);
    assert_eq!(playback.play(), None);
    assert_eq!(playback.state(), PlaybackState::Stopped);
    assert_eq!(playback.cursor(), Some(0));
}
