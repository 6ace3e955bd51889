use super::helpers::*;

use bevy::app::App;
use bevy::ecs::prelude::{Entity, On, ResMut, Resource};
use bevy::math::Vec2;
use gradient_markers::prelude::*;

#[derive(Resource, Default)]
struct ReceivedEvents(Vec<(Entity, MarkerEvent)>);

fn app_with_event_log() -> App {
    let mut app = create_minimal_app();
    app.init_resource::<ReceivedEvents>();
    app.add_observer(
        |trigger: On<GradientMarkerEvent>, mut received: ResMut<ReceivedEvents>| {
            received.0.push((trigger.entity, trigger.marker_event));
        },
    );
    app
}

fn received(app: &App) -> &[(Entity, MarkerEvent)] {
    &app.world().resource::<ReceivedEvents>().0
}

fn default_stops() -> Vec<MarkerStop> {
    vec![MarkerStop::new(0.0, BLACK), MarkerStop::new(1.0, WHITE)]
}

#[test]
fn click_on_empty_strip_adds_marker_and_triggers_event() {
    let mut app = app_with_event_log();
    let entity = spawn_editor(&mut app, &default_stops());

    feed_frame(&mut app, PointerFrame::click(marker_point(0.5)));

    assert_eq!(editor(&app, entity).data.markers.markers().len(), 3);
    assert_eq!(
        received(&app),
        &[(
            entity,
            MarkerEvent::MarkerAdded {
                id: 2,
                position: 0.5,
                color: BLACK
            }
        )]
    );
}

#[test]
fn sampled_color_is_used_with_flag() {
    let mut app = app_with_event_log();
    let entity = spawn_editor(&mut app, &default_stops());
    {
        let mut editor = app
            .world_mut()
            .get_mut::<GradientEditor>(entity)
            .expect("editor should exist");
        editor
            .data
            .markers
            .set_flags(GradientEditorFlags::NEW_MARKER_COLOR_FROM_CLICK);
        editor.sampled_color = Some(GREEN);
    }

    feed_frame(&mut app, PointerFrame::click(marker_point(0.5)));

    assert_eq!(editor(&app, entity).data.markers.collection().marker_color(2), GREEN);
}

#[test]
fn drag_moves_marker_across_updates() {
    let mut app = app_with_event_log();
    let entity = spawn_editor(
        &mut app,
        &[
            MarkerStop::new(0.0, BLACK),
            MarkerStop::new(0.5, RED),
            MarkerStop::new(1.0, WHITE),
        ],
    );

    feed_frame(&mut app, PointerFrame::click(marker_point(0.5)));
    feed_frame(&mut app, PointerFrame::drag(marker_point(0.7)));
    feed_frame(&mut app, PointerFrame::drag(marker_point(0.8)));
    feed_frame(&mut app, PointerFrame::at(marker_point(0.8)));

    let collection = editor(&app, entity).data.markers.collection();
    assert_approx(collection.marker_pos(1), 0.8);
    assert_eq!(received(&app).len(), 3);
}

#[test]
fn no_frame_means_no_updates() {
    let mut app = app_with_event_log();
    let entity = spawn_editor(&mut app, &default_stops());

    advance_frames(&mut app, 5);

    assert!(received(&app).is_empty());
    assert_eq!(editor(&app, entity).data.markers.markers().len(), 2);
}

#[test]
fn editors_are_independent() {
    let mut app = app_with_event_log();
    let first = spawn_editor(&mut app, &default_stops());

    let mut data = GradientData::from_stops(&default_stops());
    data.markers.set_regions(layout_regions(
        Vec2::new(0.0, 200.0),
        WIDGET_WIDTH,
        GRADIENT_HEIGHT,
        &MarkerConfig::default(),
        GradientEditorFlags::empty(),
    ));
    let second = app.world_mut().spawn(GradientEditor::new(data)).id();

    feed_frame(&mut app, PointerFrame::click(marker_point(0.5)));

    assert_eq!(editor(&app, first).data.markers.markers().len(), 3);
    assert_eq!(editor(&app, second).data.markers.markers().len(), 2);
    assert!(received(&app).iter().all(|(entity, _)| *entity == first));
}

#[test]
fn double_click_opens_picker_on_editor() {
    let mut app = app_with_event_log();
    let entity = spawn_editor(
        &mut app,
        &[
            MarkerStop::new(0.0, BLACK),
            MarkerStop::new(0.5, RED),
            MarkerStop::new(1.0, WHITE),
        ],
    );

    feed_frame(&mut app, PointerFrame::double_click(marker_point(0.5)));

    assert!(editor(&app, entity).data.markers.is_popup_open());
    assert!(
        received(&app)
            .iter()
            .any(|(_, event)| *event == MarkerEvent::ColorPickerOpened { id: 1, color: RED })
    );
}
