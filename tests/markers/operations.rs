use super::helpers::*;

use gradient_markers::prelude::*;

fn four_markers() -> MarkerCollection {
    MarkerCollection::from_stops(&[
        MarkerStop::new(0.0, BLACK),
        MarkerStop::new(0.25, RED),
        MarkerStop::new(0.75, GREEN),
        MarkerStop::new(1.0, WHITE),
    ])
}

#[test]
fn selection_follows_marker_across_reorder() {
    let mut markers = four_markers();
    markers.select_marker(1);
    markers.set_selected_marker_pos(0.9);

    assert_eq!(markers.selected_marker_id(), 1);
    assert_eq!(markers.selected_marker_color(), RED);
    assert_eq!(markers.index_of(1), Some(2));
    assert_eq!(markers.colors(), vec![BLACK, GREEN, RED, WHITE]);
}

#[test]
fn delete_selected_marker_selects_successor() {
    let mut markers = four_markers();
    markers.select_marker(1);
    markers.delete_selected_marker();

    assert_eq!(markers.colors(), vec![BLACK, GREEN, WHITE]);
    assert_eq!(markers.selected_marker_color(), GREEN);
    assert_eq!(markers.next_marker_id(), 3);
}

#[test]
fn ids_are_dense_after_mixed_edits() {
    let mut markers = four_markers();
    let id = markers.reserve_marker_id();
    markers.add_marker(id, 0.5, BLUE, 0.5);
    markers.move_marker(0, 0.6);
    markers.delete_marker(3);

    let mut ids: Vec<i32> = markers.markers().iter().map(|m| m.id).collect();
    ids.sort();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(markers.next_marker_id(), 4);
    // renumbering follows position order
    assert_eq!(
        markers.markers().iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn change_marker_count_shrinks_from_the_right() {
    let mut markers = four_markers();
    markers.change_marker_count(2);
    assert_eq!(markers.colors(), vec![BLACK, RED]);

    markers.change_marker_count(5);
    assert_eq!(markers.len(), 5);
    // new markers pile up at the start in white
    assert_eq!(markers.positions()[..3], [0.0, 0.0, 0.0]);
    assert_eq!(markers.positions()[4], 0.25);
}

#[test]
fn selected_midpoint_ratio_round_trip() {
    let mut markers = four_markers();
    markers.select_midpoint(2);
    markers.set_selected_midpoint_ratio(0.2);
    assert_eq!(markers.selected_midpoint_ratio(), 0.2);
    assert_approx(markers.markers()[2].midpoint.pos, 0.8);

    markers.set_selected_midpoint_ratio(3.0);
    assert_eq!(markers.selected_midpoint_ratio(), 1.0);
}

#[test]
fn distribute_with_midpoints_centers_each_span() {
    let mut markers = four_markers();
    markers.distribute_markers_and_midpoints_evenly();

    let positions = markers.positions();
    assert_approx(positions[1], 1.0 / 3.0);
    assert_approx(positions[2], 2.0 / 3.0);

    let midpoints: Vec<f32> = markers.markers()[..3].iter().map(|m| m.midpoint.pos).collect();
    assert_approx(midpoints[0], 0.25);
    assert_approx(midpoints[1], 0.5);
    assert_approx(midpoints[2], 0.75);
}

#[test]
fn set_marker_color_ignores_unknown_ids() {
    let mut markers = four_markers();
    let before = markers.clone();
    markers.set_marker_color(42, BLUE);
    markers.move_marker(42, 0.5);
    markers.move_midpoint(42, 0.5);
    markers.delete_marker(42);
    assert_eq!(markers, before);
}
