use bevy::{prelude::*, window::PrimaryWindow};

use crate::gradient::GradientData;
use crate::interaction::{MarkerEvent, PointerFrame};
use crate::marker::Rgba;
use crate::preset::{GradientPresetLibrary, GradientPresetLoader};

/// Pointer travel in logical pixels before a held button counts as a drag.
pub const DRAG_THRESHOLD: f32 = 6.0;
/// Longest gap in seconds between two presses of a double click.
pub const DOUBLE_CLICK_TIME: f64 = 0.30;
/// Farthest the second press of a double click may land from the first.
pub const DOUBLE_CLICK_MAX_DISTANCE: f32 = 6.0;

/// Registers the preset asset and drives every [`GradientEditor`] from the
/// primary window's cursor and left mouse button.
pub struct GradientMarkersPlugin;

impl Plugin for GradientMarkersPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<GradientPresetLibrary>()
            .init_asset_loader::<GradientPresetLoader>();

        app.init_resource::<PointerTracker>().add_systems(
            Update,
            (track_pointer, update_gradient_editors)
                .chain()
                .in_set(GradientEditorSystems),
        );
    }
}

/// Systems that read the pointer and update editors, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradientEditorSystems;

/// A gradient editor living on an entity.
///
/// The UI layer keeps `data.markers`' regions in sync with the on-screen widget
/// and may set `sampled_color` to the gradient color under the pointer so clicks
/// can create markers of that color.
#[derive(Component, Debug, Clone, Default)]
pub struct GradientEditor {
    pub data: GradientData,
    pub sampled_color: Option<Rgba>,
}

impl GradientEditor {
    pub fn new(data: GradientData) -> Self {
        Self {
            data,
            sampled_color: None,
        }
    }
}

/// Triggered on the editor entity for every [`MarkerEvent`] a frame produced.
#[derive(EntityEvent, Debug, Clone)]
pub struct GradientMarkerEvent {
    pub entity: Entity,
    pub marker_event: MarkerEvent,
}

/// Turns raw button state into click, drag and double-click flags.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerTracker {
    press_origin: Option<Vec2>,
    max_drag_distance: f32,
    last_click: Option<(f64, Vec2)>,
    frame: Option<PointerFrame>,
}

impl PointerTracker {
    /// Pointer state for the current frame, `None` while the cursor is outside
    /// the window.
    pub fn frame(&self) -> Option<PointerFrame> {
        self.frame
    }

    /// Overrides the current frame. Apps without a primary window or mouse input
    /// feed editors this way; the tracker leaves the frame alone in that case.
    pub fn set_frame(&mut self, frame: Option<PointerFrame>) {
        self.frame = frame;
    }

    /// Feeds one frame of input. `now` is in seconds.
    pub fn track(
        &mut self,
        position: Vec2,
        just_pressed: bool,
        pressed: bool,
        now: f64,
    ) -> PointerFrame {
        let mut double_clicked = false;
        if just_pressed {
            self.press_origin = Some(position);
            self.max_drag_distance = 0.0;

            double_clicked = self.last_click.is_some_and(|(time, origin)| {
                now - time <= DOUBLE_CLICK_TIME
                    && origin.distance(position) <= DOUBLE_CLICK_MAX_DISTANCE
            });
            // a third press starts a new pair
            self.last_click = if double_clicked {
                None
            } else {
                Some((now, position))
            };
        }

        let mut dragging = false;
        match (pressed, self.press_origin) {
            (true, Some(origin)) => {
                self.max_drag_distance = self.max_drag_distance.max(origin.distance(position));
                dragging = self.max_drag_distance >= DRAG_THRESHOLD;
            }
            (false, _) => self.press_origin = None,
            _ => {}
        }

        let frame = PointerFrame {
            position,
            clicked: just_pressed,
            dragging,
            double_clicked,
        };
        self.frame = Some(frame);
        frame
    }
}

fn track_pointer(
    mut tracker: ResMut<PointerTracker>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let (Some(mouse), Ok(window)) = (mouse, windows.single()) else {
        return;
    };
    let Some(position) = window.cursor_position() else {
        tracker.set_frame(None);
        return;
    };

    tracker.track(
        position,
        mouse.just_pressed(MouseButton::Left),
        mouse.pressed(MouseButton::Left),
        time.elapsed_secs_f64(),
    );
}

fn update_gradient_editors(
    mut commands: Commands,
    tracker: Res<PointerTracker>,
    mut editors: Query<(Entity, &mut GradientEditor)>,
) {
    let Some(frame) = tracker.frame() else {
        return;
    };

    for (entity, mut editor) in &mut editors {
        let color = editor.data.markers.new_marker_color(editor.sampled_color);
        for marker_event in editor.data.markers.process_frame(&frame, color) {
            commands.trigger(GradientMarkerEvent {
                entity,
                marker_event,
            });
        }
    }
}
