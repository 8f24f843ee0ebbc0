use std::thread::sleep;
use std::time::Duration;

use shelfmark::managers::delete_confirm::{ConfirmAction, DeleteConfirm, DISARM_WINDOW};

const WINDOW: Duration = Duration::from_millis(60);
const PAST_WINDOW: Duration = Duration::from_millis(100);

#[test]
fn test_single_press_arms_but_does_not_confirm() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Armed);
    assert!(confirm.is_armed("bm-1"));
}

#[test]
fn test_second_press_within_window_confirms() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    confirm.press("bm-1");
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Confirmed);
    // Confirming consumes the armed state.
    assert!(!confirm.is_armed("bm-1"));
}

#[test]
fn test_press_after_window_re_arms_instead_of_confirming() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    confirm.press("bm-1");
    sleep(PAST_WINDOW);

    assert!(!confirm.is_armed("bm-1"));
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Armed);
    // The re-arm opened a fresh window, so a prompt second press confirms.
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Confirmed);
}

#[test]
fn test_press_on_different_record_re_targets() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    confirm.press("bm-1");
    assert_eq!(confirm.press("bm-2"), ConfirmAction::Armed);

    assert!(!confirm.is_armed("bm-1"));
    assert!(confirm.is_armed("bm-2"));
}

#[test]
fn test_disarm_clears_armed_state() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    confirm.press("bm-1");
    confirm.disarm();

    assert!(!confirm.is_armed("bm-1"));
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Armed);
}

#[test]
fn test_confirm_then_press_arms_again() {
    let mut confirm = DeleteConfirm::with_window(WINDOW);
    confirm.press("bm-1");
    confirm.press("bm-1");
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Armed);
}

#[test]
fn test_default_window_is_three_seconds() {
    assert_eq!(DISARM_WINDOW, Duration::from_secs(3));

    let mut confirm = DeleteConfirm::new();
    assert_eq!(confirm.press("bm-1"), ConfirmAction::Armed);
    assert!(confirm.is_armed("bm-1"));
}
