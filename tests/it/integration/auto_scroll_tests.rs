//! Auto-scroll Integration Tests

use crate::helpers::{RecordingHost, TestListBuilder, move_to, start_at};
use draglist::ScrollRequest;

#[test]
fn test_trailing_edge_requests_scroll_once_per_crossing() {
    let mut engine = TestListBuilder::new(10).build();
    let mut host = RecordingHost::new(10);
    start_at(&mut engine, 150.0);

    for _ in 0..4 {
        move_to(&mut engine, &mut host, 540.0);
    }
    assert_eq!(
        host.scroll_requests,
        vec![ScrollRequest {
            offset: 540.0,
            animated: true
        }]
    );
    assert!(engine.scroll_state().is_auto_scrolling);
}

#[test]
fn test_returning_inside_rearms() {
    let mut engine = TestListBuilder::new(10).build();
    let mut host = RecordingHost::new(10);
    start_at(&mut engine, 150.0);

    assert!(move_to(&mut engine, &mut host, 540.0).scrolled());
    assert!(!move_to(&mut engine, &mut host, 540.0).scrolled());
    assert!(!move_to(&mut engine, &mut host, 300.0).scrolled());
    assert!(!engine.scroll_state().is_auto_scrolling);
    assert!(move_to(&mut engine, &mut host, 540.0).scrolled());
    assert_eq!(host.scroll_requests.len(), 2);
}

#[test]
fn test_leading_edge_needs_scrolled_list() {
    let mut engine = TestListBuilder::new(10).with_viewport(400.0).build();
    let mut host = RecordingHost::new(10);
    start_at(&mut engine, 150.0);

    assert!(!move_to(&mut engine, &mut host, 80.0).scrolled());

    engine.on_scroll(200.0);
    let outcome = move_to(&mut engine, &mut host, 80.0);
    assert!(outcome.scrolled());
    assert_eq!(host.scroll_requests.last().map(|r| r.offset), Some(80.0));
}

#[test]
fn test_reorder_follows_reported_scroll() {
    let mut engine = TestListBuilder::new(10).build();
    let mut host = RecordingHost::new(10);
    start_at(&mut engine, 150.0);

    move_to(&mut engine, &mut host, 540.0);
    assert_eq!(engine.drag_index(), Some(5));

    // The host applied the request and reports the new offset
    engine.on_scroll(300.0);
    let outcome = move_to(&mut engine, &mut host, 540.0);
    assert_eq!(outcome.reorder(), Some((5, 8)));
}

#[test]
fn test_end_disarms_auto_scroll() {
    let mut engine = TestListBuilder::new(10).build();
    let mut host = RecordingHost::new(10);
    start_at(&mut engine, 150.0);
    move_to(&mut engine, &mut host, 540.0);
    assert!(engine.scroll_state().is_auto_scrolling);

    engine.end_drag();
    assert!(!engine.scroll_state().is_auto_scrolling);

    start_at(&mut engine, 150.0);
    assert!(move_to(&mut engine, &mut host, 540.0).scrolled());
}
