use super::helpers::*;

use gradient_markers::prelude::*;

#[test]
fn distribute_keeps_default_pair() {
    let mut markers = MarkerCollection::new();
    let before = markers.clone();
    markers.distribute_markers_evenly();
    assert_eq!(markers, before);
}

#[test]
fn distribute_spreads_three_markers() {
    let mut markers = MarkerCollection::from_stops(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.9, RED),
        MarkerStop::new(1.0, WHITE),
    ]);
    markers.distribute_markers_evenly();
    assert_eq!(markers.positions(), vec![0.0, 0.5, 1.0]);
    assert_eq!(markers.colors(), vec![BLACK, RED, WHITE]);
}

#[test]
fn add_marker_into_default_pair() {
    let mut markers = MarkerCollection::new();
    let id = markers.reserve_marker_id();
    markers.add_marker(id, 0.5, WHITE, 0.5);

    assert_eq!(markers.positions(), vec![0.0, 0.5, 1.0]);
    assert_eq!(markers.id_at(1), Some(id));
    let midpoints: Vec<f32> = markers.markers()[..2].iter().map(|m| m.midpoint.pos).collect();
    assert_eq!(midpoints, vec![0.25, 0.75]);
}

#[test]
fn delete_stops_at_two_markers() {
    let mut markers = MarkerCollection::from_stops(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.3, RED),
        MarkerStop::new(0.6, GREEN),
        MarkerStop::new(1.0, WHITE),
    ]);

    markers.delete_marker(1);
    markers.delete_marker(1);
    assert_eq!(markers.len(), 2);

    let before = markers.clone();
    markers.delete_marker(0);
    markers.delete_marker(1);
    assert_eq!(markers, before);
}

#[test]
fn reverse_mirrors_three_markers() {
    let mut markers = MarkerCollection::from_stops(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.3, RED),
        MarkerStop::new(1.0, WHITE),
    ]);
    markers.reverse_markers();

    let positions = markers.positions();
    assert_approx(positions[0], 0.0);
    assert_approx(positions[1], 0.7);
    assert_approx(positions[2], 1.0);
    assert_eq!(markers.colors(), vec![WHITE, RED, BLACK]);

    // the selected span 0.0..0.3 is now 0.7..1.0, owned by the red marker
    assert_eq!(markers.selected_midpoint_id(), markers.id_at(1).unwrap_or(-1));
}

#[test]
fn move_midpoint_ignores_collapsed_span() {
    let mut markers = MarkerCollection::from_stops(&[
        MarkerStop::new(0.0, BLACK).with_midpoint(0.3),
        MarkerStop::new(0.50005, RED).with_midpoint(0.4),
        MarkerStop::new(0.5, WHITE),
        MarkerStop::new(1.0, WHITE),
    ]);
    let id = markers.id_at(1).unwrap_or(-1);
    let before = markers.midpoint_ratio(id);

    markers.move_midpoint(id, 0.9);

    assert_eq!(markers.midpoint_ratio(id), before);
    assert!(markers.markers().iter().all(|m| m.midpoint.pos.is_finite()));
}
