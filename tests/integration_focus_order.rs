mod common;

use common::{DESKTOP_VIEWPORT, RecordingSurface, add_panel};
use desk_wm::{DeskManager, InputResult, PanelId, Point, PointerId, PointerInput, Rect};

const A: PanelId = PanelId(1);
const B: PanelId = PanelId(2);

fn desk_with_two_panels() -> (DeskManager, RecordingSurface) {
    let mut desk = DeskManager::new();
    let mut surface = RecordingSurface::new(DESKTOP_VIEWPORT);
    add_panel(&mut desk, &mut surface, A, Rect::new(50.0, 50.0, 300.0, 200.0));
    add_panel(&mut desk, &mut surface, B, Rect::new(500.0, 50.0, 300.0, 200.0));
    (desk, surface)
}

fn tap(desk: &mut DeskManager, surface: &mut RecordingSurface, at: Point) {
    // body tap in desktop mode: raises without dragging
    let result = desk.handle_pointer(surface, PointerInput::down(PointerId(1), at));
    assert!(matches!(result, InputResult::Focused(_)));
    desk.handle_pointer(surface, PointerInput::up(PointerId(1), at));
}

#[test]
fn refocusing_puts_a_panel_back_on_top() {
    let (mut desk, mut surface) = desk_with_two_panels();

    tap(&mut desk, &mut surface, Point::new(200.0, 150.0)); // A
    tap(&mut desk, &mut surface, Point::new(600.0, 150.0)); // B
    assert!(surface.stacking[&B] > surface.stacking[&A]);

    tap(&mut desk, &mut surface, Point::new(200.0, 150.0)); // A again
    assert!(surface.stacking[&A] > surface.stacking[&B]);
}

#[test]
fn every_focus_assigns_a_strictly_greater_value() {
    let (mut desk, mut surface) = desk_with_two_panels();

    let mut last = 0;
    for _ in 0..4 {
        for (panel, at) in [(A, Point::new(200.0, 150.0)), (B, Point::new(600.0, 150.0))] {
            tap(&mut desk, &mut surface, at);
            let assigned = desk.panel(panel).unwrap().stacking();
            assert!(assigned > last);
            last = assigned;
        }
    }
}

#[test]
fn a_dragging_click_raises_too() {
    let (mut desk, mut surface) = desk_with_two_panels();

    tap(&mut desk, &mut surface, Point::new(600.0, 150.0)); // B on top
    let started =
        desk.handle_pointer(&mut surface, PointerInput::down(PointerId(1), Point::new(60.0, 60.0)));
    assert_eq!(started, InputResult::DragStarted(A));
    assert!(surface.stacking[&A] > surface.stacking[&B]);
}

#[test]
fn focus_still_works_while_another_pointer_drags() {
    let (mut desk, mut surface) = desk_with_two_panels();

    desk.handle_pointer(&mut surface, PointerInput::down(PointerId(1), Point::new(60.0, 60.0)));
    assert_eq!(desk.dragging(), Some(A));

    // a second finger taps panel B: raised, but no second session
    let result =
        desk.handle_pointer(&mut surface, PointerInput::down(PointerId(2), Point::new(600.0, 150.0)));
    assert_eq!(result, InputResult::Focused(B));
    assert!(surface.stacking[&B] > surface.stacking[&A]);
    assert_eq!(desk.dragging(), Some(A));
}

#[test]
fn a_click_on_empty_desktop_is_ignored() {
    let (mut desk, mut surface) = desk_with_two_panels();

    let result =
        desk.handle_pointer(&mut surface, PointerInput::down(PointerId(1), Point::new(900.0, 700.0)));
    assert_eq!(result, InputResult::Ignored);
    assert!(surface.stacking.is_empty());
}
