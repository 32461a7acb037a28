// Host-side tests for the marker board gesture model.

use board_core::*;
use glam::Vec2;

fn board() -> Board {
    Board::new(BoardConfig::default(), CanvasExtent::new(700.0, 400.0))
}

fn click(board: &mut Board, x: f32, y: f32) -> PointerOutcome {
    let pos = Vec2::new(x, y);
    board.begin_drag(pos, PointerButton::Primary);
    board.end_drag(pos, PointerButton::Primary)
}

#[test]
fn release_on_empty_board_creates_marker() {
    let mut b = board();
    let out = click(&mut b, 50.0, 50.0);
    assert_eq!(out, PointerOutcome::Created(0));
    assert_eq!(b.len(), 1);
    assert_eq!(b.markers[0].position, Vec2::new(50.0, 50.0));
    assert!(!b.markers[0].fence);
}

#[test]
fn n_spaced_clicks_create_n_markers() {
    let mut b = board();
    for i in 0..6 {
        // 100 units apart so no press lands within the pick threshold
        click(&mut b, 20.0 + 100.0 * i as f32, 200.0);
    }
    assert_eq!(b.len(), 6);
}

#[test]
fn add_marker_rejects_out_of_bounds() {
    let mut b = board();
    assert_eq!(b.add_marker(Vec2::new(-1.0, 10.0)), None);
    assert_eq!(b.add_marker(Vec2::new(700.0, 10.0)), None);
    assert_eq!(b.add_marker(Vec2::new(10.0, 400.0)), None);
    assert_eq!(b.add_marker(Vec2::new(0.0, 0.0)), Some(0));
    assert_eq!(b.add_marker(Vec2::new(699.5, 399.5)), Some(1));
    assert_eq!(b.len(), 2);
}

#[test]
fn duplicate_positions_are_allowed() {
    let mut b = board();
    b.add_marker(Vec2::new(10.0, 10.0));
    b.add_marker(Vec2::new(10.0, 10.0));
    assert_eq!(b.len(), 2);
}

#[test]
fn find_nearest_on_empty_board_is_none() {
    assert_eq!(board().find_nearest(Vec2::new(1.0, 1.0)), None);
}

#[test]
fn find_nearest_returns_minimum_distance() {
    let mut b = board();
    b.add_marker(Vec2::new(0.0, 0.0));
    b.add_marker(Vec2::new(100.0, 0.0));
    b.add_marker(Vec2::new(40.0, 30.0));
    let (i, d) = b.find_nearest(Vec2::new(40.0, 0.0)).unwrap();
    assert_eq!(i, 2);
    assert!((d - 30.0).abs() < 1e-4);
}

#[test]
fn find_nearest_ties_prefer_earliest_marker() {
    let mut b = board();
    b.add_marker(Vec2::new(10.0, 50.0));
    b.add_marker(Vec2::new(90.0, 50.0));
    b.add_marker(Vec2::new(10.0, 50.0));
    let (i, d) = b.find_nearest(Vec2::new(50.0, 50.0)).unwrap();
    assert_eq!(i, 0);
    assert!((d - 40.0).abs() < 1e-4);
}

#[test]
fn press_near_marker_then_release_moves_it() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));

    b.begin_drag(Vec2::new(120.0, 110.0), PointerButton::Primary);
    assert_eq!(
        b.selection(),
        Some(Selection {
            index: 0,
            action: SelectionAction::Move
        })
    );
    let out = b.end_drag(Vec2::new(200.0, 200.0), PointerButton::Primary);

    assert_eq!(out, PointerOutcome::Moved(0));
    assert_eq!(b.len(), 1);
    assert_eq!(b.markers[0].position, Vec2::new(200.0, 200.0));
    assert_eq!(b.selection(), None);
}

#[test]
fn press_beyond_threshold_then_release_creates_marker() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));

    b.begin_drag(Vec2::new(160.0, 100.0), PointerButton::Primary);
    assert_eq!(b.selection(), None);
    let out = b.end_drag(Vec2::new(300.0, 300.0), PointerButton::Primary);

    assert_eq!(out, PointerOutcome::Created(1));
    assert_eq!(b.markers[0].position, Vec2::new(100.0, 100.0));
    assert_eq!(b.markers[1].position, Vec2::new(300.0, 300.0));
}

#[test]
fn pick_threshold_is_exclusive() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));
    b.begin_drag(Vec2::new(100.0 + PICK_THRESHOLD, 100.0), PointerButton::Primary);
    assert_eq!(b.selection(), None);
    b.begin_drag(Vec2::new(100.0 + PICK_THRESHOLD - 0.5, 100.0), PointerButton::Primary);
    assert!(b.selection().is_some());
}

#[test]
fn drag_updates_position_without_clamping() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));
    b.begin_drag(Vec2::new(100.0, 100.0), PointerButton::Primary);
    b.update_drag(Vec2::new(150.0, 120.0));
    assert_eq!(b.markers[0].position, Vec2::new(150.0, 120.0));
    b.update_drag(Vec2::new(-40.0, 900.0));
    assert_eq!(b.markers[0].position, Vec2::new(-40.0, 900.0));

    let out = b.end_drag(Vec2::new(-40.0, 900.0), PointerButton::Primary);
    assert_eq!(out, PointerOutcome::Moved(0));
    assert_eq!(b.len(), 1);
}

#[test]
fn update_drag_without_selection_is_noop() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));
    b.update_drag(Vec2::new(5.0, 5.0));
    assert_eq!(b.markers[0].position, Vec2::new(100.0, 100.0));
}

#[test]
fn release_outside_canvas_without_selection_is_ignored() {
    let mut b = board();
    b.begin_drag(Vec2::new(720.0, 10.0), PointerButton::Primary);
    let out = b.end_drag(Vec2::new(720.0, 10.0), PointerButton::Primary);
    assert_eq!(out, PointerOutcome::Ignored);
    assert!(b.is_empty());
}

#[test]
fn secondary_press_toggles_fence_and_never_moves() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));

    b.begin_drag(Vec2::new(110.0, 100.0), PointerButton::Secondary);
    b.update_drag(Vec2::new(300.0, 300.0));
    let out = b.end_drag(Vec2::new(300.0, 300.0), PointerButton::Secondary);
    assert_eq!(out, PointerOutcome::FenceToggled(0, true));
    assert!(b.markers[0].fence);
    assert_eq!(b.markers[0].position, Vec2::new(100.0, 100.0));

    b.begin_drag(Vec2::new(100.0, 100.0), PointerButton::Secondary);
    let out = b.end_drag(Vec2::new(100.0, 100.0), PointerButton::Secondary);
    assert_eq!(out, PointerOutcome::FenceToggled(0, false));
    assert!(!b.markers[0].fence);
}

#[test]
fn secondary_release_on_empty_canvas_does_not_create() {
    let mut b = board();
    b.begin_drag(Vec2::new(50.0, 50.0), PointerButton::Secondary);
    let out = b.end_drag(Vec2::new(50.0, 50.0), PointerButton::Secondary);
    assert_eq!(out, PointerOutcome::Ignored);
    assert!(b.is_empty());
}

#[test]
fn cancel_drag_clears_selection() {
    let mut b = board();
    b.add_marker(Vec2::new(100.0, 100.0));
    b.begin_drag(Vec2::new(100.0, 100.0), PointerButton::Primary);
    b.cancel_drag();
    assert_eq!(b.selection(), None);
    b.update_drag(Vec2::new(10.0, 10.0));
    assert_eq!(b.markers[0].position, Vec2::new(100.0, 100.0));
}

#[test]
fn dom_button_codes_map_to_pointer_buttons() {
    assert_eq!(PointerButton::from_dom_button(0), Some(PointerButton::Primary));
    assert_eq!(PointerButton::from_dom_button(2), Some(PointerButton::Secondary));
    assert_eq!(PointerButton::from_dom_button(1), None);
    assert_eq!(PointerButton::from_dom_button(-1), None);
}

#[test]
fn radius_setters_update_config() {
    let mut b = board();
    b.set_broadcast_radius(120.0);
    b.set_coverage_radius(35.0);
    assert_eq!(
        b.config,
        BoardConfig {
            broadcast_radius: 120.0,
            coverage_radius: 35.0
        }
    );
}
