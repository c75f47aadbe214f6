// Integration tests for the playback controller

use rstest::rstest;
use tracescrub::playback::clock::ManualClock;
use tracescrub::playback::{PlaybackController, PlaybackState, Speed};
use tracescrub::trace::{Step, StepTrace};

fn trace(lines: &[usize]) -> StepTrace {
    let last = lines.len().saturating_sub(1);
    StepTrace::new(
        lines
            .iter()
            .enumerate()
            .map(|(i, &line_number)| Step {
                line_number,
                is_complete: i == last,
                ..Step::default()
            })
            .collect(),
    )
}

fn controller(total: usize) -> (PlaybackController<ManualClock>, ManualClock) {
    let lines: Vec<usize> = (1..=total).collect();
    let clock = ManualClock::new();
    (
        PlaybackController::with_clock(trace(&lines), clock.clone()),
        clock,
    )
}

#[rstest]
#[case(0, 0)]
#[case(3, 3)]
#[case(9, 9)]
#[case(10, 9)]
#[case(usize::MAX, 9)]
fn test_go_to_step_clamps(#[case] requested: usize, #[case] expected: usize) {
    let (mut c, _clock) = controller(10);
    c.go_to_step(requested);
    assert_eq!(c.current_step(), expected);
}

#[test]
fn test_go_to_step_keeps_playing_state() {
    let (mut c, _clock) = controller(10);
    c.play();
    c.go_to_step(5);
    assert!(c.is_playing());
    c.pause();
    c.go_to_step(2);
    assert!(!c.is_playing());
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(4)]
fn test_step_forward_stops_at_last(#[case] start: usize) {
    let (mut c, _clock) = controller(5);
    c.go_to_step(start);
    for _ in 0..20 {
        c.step_forward();
    }
    assert_eq!(c.current_step(), 4);
    assert_eq!(c.state(), PlaybackState::Finished);
}

#[test]
fn test_step_forward_at_last_stops_playback() {
    let (mut c, _clock) = controller(3);
    c.play();
    c.go_to_step(2);
    assert!(c.is_playing());

    c.step_forward();
    assert_eq!(c.current_step(), 2);
    assert!(!c.is_playing());
    assert!(!c.has_timer());
}

#[test]
fn test_step_back_clamps_at_zero() {
    let (mut c, _clock) = controller(3);
    c.step_back();
    c.step_back();
    assert_eq!(c.current_step(), 0);
}

#[test]
fn test_reset_cancels_timer() {
    let (mut c, clock) = controller(5);
    c.play();
    clock.advance_millis(2000);
    c.poll();
    assert_eq!(c.current_step(), 2);

    c.reset();
    assert_eq!(c.current_step(), 0);
    assert!(!c.is_playing());
    assert!(!c.has_timer());

    clock.advance_millis(5000);
    assert_eq!(c.poll(), 0);
    assert_eq!(c.current_step(), 0);
}

#[test]
fn test_play_five_steps_to_the_end() {
    let (mut c, clock) = controller(5);
    c.play();

    for _ in 0..5 {
        clock.advance_millis(1000);
        assert_eq!(c.poll(), 1);
    }
    assert_eq!(c.current_step(), 4);
    assert!(!c.is_playing());

    // Sixth tick: nothing left to fire
    clock.advance_millis(1000);
    assert_eq!(c.poll(), 0);
    assert_eq!(c.current_step(), 4);
    assert!(!c.is_playing());
}

#[test]
fn test_speed_change_leaves_no_ghost_tick() {
    let (mut c, clock) = controller(10);
    c.play();

    clock.advance_millis(600);
    c.set_speed(Speed::Quadruple);

    // The 1x timer would have fired at 1000ms; only the 4x tick at 850ms may fire
    clock.advance_millis(400);
    assert_eq!(c.poll(), 1);
    assert_eq!(c.current_step(), 1);

    // Next 4x ticks at 1100ms and 1350ms
    clock.advance_millis(100);
    assert_eq!(c.poll(), 1);
    clock.advance_millis(249);
    assert_eq!(c.poll(), 0);
    clock.advance_millis(1);
    assert_eq!(c.poll(), 1);
    assert_eq!(c.current_step(), 3);
}

#[test]
fn test_set_speed_while_paused_does_not_start_timer() {
    let (mut c, _clock) = controller(4);
    c.set_speed(Speed::Half);
    assert!(!c.has_timer());
    assert_eq!(c.time_until_tick(), None);
}

#[test]
fn test_late_poll_catches_up() {
    let (mut c, clock) = controller(10);
    c.set_speed(Speed::Double);
    c.play();
    clock.advance_millis(1600);
    assert_eq!(c.poll(), 3);
    assert_eq!(c.current_step(), 3);
}

#[test]
fn test_empty_trace_is_inert() {
    let clock = ManualClock::new();
    let mut c = PlaybackController::with_clock(StepTrace::empty(), clock.clone());

    c.play();
    assert!(!c.is_playing());
    assert!(!c.has_timer());

    c.step_forward();
    c.step_back();
    c.go_to_step(7);
    c.set_speed(Speed::Quadruple);
    c.reset();
    clock.advance_millis(10_000);
    assert_eq!(c.poll(), 0);

    assert_eq!(c.current_step(), 0);
    assert!(c.current().is_none());
    assert_eq!(c.state(), PlaybackState::Idle);
}

#[test]
fn test_executed_lines_follow_position() {
    let clock = ManualClock::new();
    let mut c = PlaybackController::with_clock(trace(&[1, 2, 2, 3, 1]), clock);
    c.go_to_step(3);

    let mut lines: Vec<usize> = c.executed_lines().into_iter().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec![1, 2]);
    assert_eq!(c.current().and_then(Step::line), Some(3));
}
