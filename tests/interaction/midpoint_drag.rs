use super::helpers::*;

use gradient_markers::prelude::*;

#[test]
fn click_and_drag_midpoint() {
    let mut manager = test_manager();
    let events = click_and_drag(&mut manager, midpoint_point(0.5), &[midpoint_point(0.25)]);

    assert_eq!(
        events,
        vec![
            MarkerEvent::MidpointClicked { id: 0 },
            MarkerEvent::MidpointMoved { id: 0, ratio: 0.25 },
        ]
    );
    assert_eq!(manager.collection().selected_midpoint_id(), 0);
    assert_eq!(manager.markers()[0].midpoint.pos, 0.25);
}

#[test]
fn midpoint_ratio_is_relative_to_span() {
    let mut manager = test_manager_with(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.5, RED),
        MarkerStop::new(1.0, WHITE),
    ]);
    // second span 0.5..1.0, midpoint at 0.75
    click_and_drag(&mut manager, midpoint_point(0.75), &[midpoint_point(0.6)]);

    assert_eq!(manager.collection().selected_midpoint_id(), 1);
    assert_approx(manager.collection().midpoint_ratio(1), 0.2);
    assert_eq!(manager.collection().midpoint_ratio(0), 0.5);
}

#[test]
fn midpoint_drag_clamps_inside_span() {
    let mut manager = test_manager_with(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.5, RED),
        MarkerStop::new(1.0, WHITE),
    ]);
    click_and_drag(&mut manager, midpoint_point(0.25), &[midpoint_point(0.9)]);
    assert_eq!(manager.collection().midpoint_ratio(0), 1.0);
    assert_eq!(manager.markers()[0].midpoint.pos, 0.5);
}

#[test]
fn empty_midpoint_strip_selects_nothing() {
    let mut manager = test_manager();
    let events = click_and_drag(&mut manager, midpoint_point(0.95), &[midpoint_point(0.3)]);

    assert!(events.is_empty());
    assert_eq!(manager.interaction().clicked_midpoint, HitTarget::EmptyRegion);
    assert_eq!(manager.collection().midpoint_ratio(0), 0.5);
    // the midpoint strip never creates markers
    assert_eq!(manager.markers().len(), 2);
}

#[test]
fn hidden_midpoints_ignore_pointer() {
    let mut manager = test_manager().with_flags(GradientEditorFlags::NO_MIDPOINT);
    let events = click_and_drag(&mut manager, midpoint_point(0.5), &[midpoint_point(0.2)]);

    assert!(events.is_empty());
    assert_eq!(manager.collection().midpoint_ratio(0), 0.5);
}

#[test]
fn hidden_markers_still_allow_midpoints() {
    let mut manager = test_manager().with_flags(GradientEditorFlags::NO_MARKER);
    let events = click_and_drag(&mut manager, midpoint_point(0.5), &[midpoint_point(0.75)]);

    assert_eq!(events.len(), 2);
    assert_eq!(manager.collection().midpoint_ratio(0), 0.75);
}
