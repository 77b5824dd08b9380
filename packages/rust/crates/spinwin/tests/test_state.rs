//! Wheel state transitions, countdown, and sector editing.

use spinwin::{
    ScriptedRandom, Sector, SeededRandom, TickOutcome, WheelError, WheelState, default_sectors,
};

fn two_sector_wheel() -> WheelState {
    WheelState::new(vec![
        Sector::new("10% OFF", "#FF6B6B", 1.0).with_discount(10),
        Sector::new("TRY AGAIN", "#A29BFE", 1.0),
    ])
    .with_countdown(3)
}

#[test]
fn test_default_state_is_idle() {
    let state = WheelState::default();
    assert_eq!(state.sectors(), default_sectors().as_slice());
    assert!(!state.is_spinning());
    assert!(state.last_result().is_none());
    assert_eq!(state.countdown_remaining(), 10);
}

#[test]
fn test_spin_lifecycle() {
    let mut state = two_sector_wheel();
    let mut source = ScriptedRandom::new(vec![0.1]);

    let index = state.spin_with(&mut source).expect("spin starts");
    assert_eq!(index, 0);
    assert!(state.is_spinning());
    assert!(state.last_result().is_none());

    let outcome = state.complete_spin(index).expect("spin completes").clone();
    assert!(!state.is_spinning());
    assert_eq!(outcome.label, "10% OFF");
    assert_eq!(outcome.discount, Some(10));
    assert!(outcome.is_win);
    assert_eq!(outcome.message(), "You won: 10% OFF");
    assert_eq!(state.last_result(), Some(&outcome));
}

#[test]
fn test_try_again_is_not_a_win() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("start");
    let outcome = state.complete_spin(1).expect("complete");
    assert!(!outcome.is_win);
    assert_eq!(outcome.message(), "Better luck next time!");
}

#[test]
fn test_only_one_spin_in_flight() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("first spin");
    assert_eq!(state.start_spin(), Err(WheelError::SpinInProgress));
    assert_eq!(
        state.spin_with(&mut SeededRandom::new(1)),
        Err(WheelError::SpinInProgress)
    );
}

#[test]
fn test_complete_requires_spin_and_valid_index() {
    let mut state = two_sector_wheel();
    assert_eq!(state.complete_spin(0).err(), Some(WheelError::NotSpinning));

    state.start_spin().expect("start");
    assert_eq!(
        state.complete_spin(5).err(),
        Some(WheelError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert!(state.is_spinning());
}

#[test]
fn test_start_spin_validates_sectors() {
    let mut empty = WheelState::new(Vec::new());
    assert_eq!(empty.start_spin(), Err(WheelError::EmptyInput));
    assert!(!empty.is_spinning());

    let mut negative = WheelState::new(vec![Sector::new("X", "#000", -1.0)]);
    assert!(matches!(
        negative.spin_with(&mut SeededRandom::new(2)),
        Err(WheelError::InvalidWeight { index: 0, .. })
    ));
    assert!(!negative.is_spinning());
}

#[test]
fn test_countdown_auto_resets() {
    let mut state = two_sector_wheel();
    assert_eq!(state.tick(), TickOutcome::Idle);

    state.start_spin().expect("start");
    assert_eq!(state.tick(), TickOutcome::Idle);
    state.complete_spin(0).expect("complete");

    assert_eq!(state.tick(), TickOutcome::Counting { remaining: 2 });
    assert_eq!(state.tick(), TickOutcome::Counting { remaining: 1 });
    assert_eq!(state.tick(), TickOutcome::AutoReset);
    assert!(state.last_result().is_none());
    assert_eq!(state.countdown_remaining(), 3);
    assert_eq!(state.tick(), TickOutcome::Idle);
}

#[test]
fn test_manual_reset() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("start");
    assert_eq!(state.reset(), Err(WheelError::SpinInProgress));

    state.complete_spin(1).expect("complete");
    state.tick();
    assert_eq!(state.countdown_remaining(), 2);

    state.reset().expect("reset when idle");
    assert!(state.last_result().is_none());
    assert_eq!(state.countdown_remaining(), 3);
}

#[test]
fn test_new_spin_clears_previous_result() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("start");
    state.complete_spin(0).expect("complete");
    state.tick();

    state.start_spin().expect("second spin");
    assert!(state.last_result().is_none());
    assert_eq!(state.countdown_remaining(), 3);
}

#[test]
fn test_sector_editing() {
    let mut state = two_sector_wheel();

    let index = state
        .add_sector(Sector::new("FREE ITEM", "#F2545B", 0.5))
        .expect("add");
    assert_eq!(index, 2);
    assert_eq!(state.sectors().len(), 3);

    let previous = state
        .update_sector(0, Sector::new("15% OFF", "#FFD93D", 2.0).with_discount(15))
        .expect("update");
    assert_eq!(previous.label, "10% OFF");
    assert_eq!(state.sectors()[0].label, "15% OFF");

    let removed = state.remove_sector(1).expect("remove");
    assert!(removed.is_try_again());
    assert_eq!(state.sectors().len(), 2);
}

#[test]
fn test_sector_editing_validation() {
    let mut state = two_sector_wheel();
    assert_eq!(
        state.add_sector(Sector::new("  ", "#000", 1.0)),
        Err(WheelError::InvalidLabel)
    );
    assert!(matches!(
        state.add_sector(Sector::new("Bad", "#000", -2.0)),
        Err(WheelError::InvalidWeight { index: 2, .. })
    ));
    assert!(matches!(
        state.update_sector(1, Sector::new("Bad", "#000", f64::NAN)),
        Err(WheelError::InvalidWeight { index: 1, .. })
    ));
    assert_eq!(
        state.remove_sector(9),
        Err(WheelError::IndexOutOfRange { index: 9, len: 2 })
    );

    state.remove_sector(0).expect("remove first");
    assert_eq!(state.remove_sector(0), Err(WheelError::LastSector));
    assert_eq!(state.sectors().len(), 1);
}

#[test]
fn test_edits_blocked_while_spinning() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("start");
    assert_eq!(
        state.add_sector(Sector::new("New", "#000", 1.0)),
        Err(WheelError::SpinInProgress)
    );
    assert_eq!(state.remove_sector(0), Err(WheelError::SpinInProgress));
    assert_eq!(
        state.update_sector(0, Sector::new("New", "#000", 1.0)),
        Err(WheelError::SpinInProgress)
    );
}

#[test]
fn test_outcome_survives_later_edits() {
    let mut state = two_sector_wheel();
    state.start_spin().expect("start");
    state.complete_spin(0).expect("complete");
    state
        .update_sector(0, Sector::new("Renamed", "#000", 1.0))
        .expect("edit after spin");
    assert_eq!(
        state.last_result().map(|o| o.label.as_str()),
        Some("10% OFF")
    );
}

#[test]
fn test_rejected_draw_leaves_wheel_idle() {
    let mut state = two_sector_wheel();
    let mut source = ScriptedRandom::new(vec![f64::NAN]);
    assert!(matches!(
        state.spin_with(&mut source),
        Err(WheelError::InvalidDraw { .. })
    ));
    assert!(!state.is_spinning());
    assert!(state.start_spin().is_ok());
}
