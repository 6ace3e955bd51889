use bevy::log::debug;
use bevy::math::Vec2;

use crate::collection::MarkerCollection;
use crate::config::{ClickAction, GradientEditorFlags, MarkerConfig};
use crate::interaction::{
    ColorPickerState, HitTarget, InteractionState, MarkerEvent, PointerFrame,
};
use crate::marker::{DEFAULT_MIDPOINT_RATIO, Marker, MarkerStop, Rgba};
use crate::region::{MarkerRegions, glyph_contains};

/// Owns one editor's markers and turns per-frame pointer input into marker
/// operations.
///
/// Each frame the rendering layer sets the three regions, then calls
/// [`GradientMarkerManager::process_frame`] with the pointer state and reads the
/// markers back for drawing. Nothing here is shared between editors.
#[derive(Debug, Clone, Default)]
pub struct GradientMarkerManager {
    collection: MarkerCollection,
    regions: MarkerRegions,
    config: MarkerConfig,
    flags: GradientEditorFlags,
    interaction: InteractionState,
    picker: ColorPickerState,
}

impl GradientMarkerManager {
    pub fn new(config: MarkerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_flags(mut self, flags: GradientEditorFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_stops(mut self, stops: &[MarkerStop]) -> Self {
        self.collection = MarkerCollection::from_stops(stops);
        self
    }

    pub fn collection(&self) -> &MarkerCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut MarkerCollection {
        &mut self.collection
    }

    pub fn markers(&self) -> &[Marker] {
        self.collection.markers()
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MarkerConfig) {
        self.config = config;
    }

    pub fn set_marker_width(&mut self, width: f32) {
        self.config.marker_width = width;
    }

    pub fn flags(&self) -> GradientEditorFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: GradientEditorFlags) {
        self.flags = flags;
    }

    pub fn regions(&self) -> &MarkerRegions {
        &self.regions
    }

    pub fn set_regions(&mut self, regions: MarkerRegions) {
        self.regions = regions;
    }

    pub fn set_marker_region(&mut self, p0: Vec2, p1: Vec2) {
        self.regions.set_marker_region(p0, p1);
    }

    pub fn set_midpoint_region(&mut self, p0: Vec2, p1: Vec2) {
        self.regions.set_midpoint_region(p0, p1);
    }

    pub fn set_gradient_region(&mut self, p0: Vec2, p1: Vec2) {
        self.regions.set_gradient_region(p0, p1);
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_marker_added(&self) -> bool {
        self.interaction.marker_added
    }

    pub fn picker(&self) -> &ColorPickerState {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut ColorPickerState {
        &mut self.picker
    }

    pub fn is_popup_open(&self) -> bool {
        self.picker.is_open()
    }

    pub fn close_color_picker(&mut self) {
        self.picker.close();
    }

    /// Replaces every marker, e.g. when loading a preset or host parameters.
    pub fn set_stops(&mut self, stops: &[MarkerStop]) {
        self.collection
            .set_default_markers(&stops.iter().map(Marker::from).collect::<Vec<_>>());
    }

    pub fn to_stops(&self) -> Vec<MarkerStop> {
        self.collection.to_stops()
    }

    pub fn marker_pos_from_pointer(&self, pointer: Vec2) -> f32 {
        self.regions.gradient_pos_from_pointer(pointer)
    }

    /// Resolves the pointer against the marker strip.
    ///
    /// Markers are tested in position order and the first glyph containing the
    /// pointer wins.
    pub fn marker_under_pointer(&self, pointer: Vec2) -> HitTarget {
        let width = self.config.marker_width;
        if !self.regions.in_marker_strip(pointer, width) {
            return HitTarget::Outside;
        }

        self.collection
            .markers()
            .iter()
            .find(|m| glyph_contains(self.regions.marker_glyph(m.pos, width), pointer))
            .map_or(HitTarget::EmptyRegion, |m| HitTarget::Marker(m.id))
    }

    /// Resolves the pointer against the midpoint strip. The last marker owns no
    /// midpoint and is skipped.
    pub fn midpoint_under_pointer(&self, pointer: Vec2) -> HitTarget {
        if !self.regions.in_midpoint_strip(pointer) {
            return HitTarget::Outside;
        }

        let width = self.config.midpoint_width();
        let markers = self.collection.markers();
        markers[..markers.len().saturating_sub(1)]
            .iter()
            .find(|m| glyph_contains(self.regions.midpoint_glyph(m.midpoint.pos, width), pointer))
            .map_or(HitTarget::EmptyRegion, |m| HitTarget::Midpoint(m.id))
    }

    /// Color for markers created by clicking the strip: the sampled gradient color
    /// under the pointer when [`GradientEditorFlags::NEW_MARKER_COLOR_FROM_CLICK`] is
    /// set and a sample is available, the selected marker's color otherwise.
    pub fn new_marker_color(&self, sampled: Option<Rgba>) -> Rgba {
        let from_click = self
            .flags
            .contains(GradientEditorFlags::NEW_MARKER_COLOR_FROM_CLICK);
        match sampled {
            Some(color) if from_click => color,
            _ => self.collection.selected_marker_color(),
        }
    }

    /// Runs one frame of the interaction state machine.
    pub fn process_frame(
        &mut self,
        frame: &PointerFrame,
        new_marker_color: Rgba,
    ) -> Vec<MarkerEvent> {
        let mut events = Vec::new();

        if !self.flags.contains(GradientEditorFlags::NO_MARKER) {
            self.on_double_clicked_marker(frame, &mut events);
            self.update_marker(frame, new_marker_color, &mut events);
        }
        if !self.flags.contains(GradientEditorFlags::NO_MIDPOINT) {
            self.update_midpoint(frame, &mut events);
        }
        self.update_color_picker();

        events
    }

    fn on_double_clicked_marker(&mut self, frame: &PointerFrame, events: &mut Vec<MarkerEvent>) {
        if !frame.double_clicked || self.picker.is_open() {
            return;
        }
        let Some(id) = self.marker_under_pointer(frame.position).marker_id() else {
            return;
        };

        events.push(MarkerEvent::MarkerDoubleClicked { id });

        if self.config.double_click_action == ClickAction::OpenColorPicker {
            self.collection.select_marker(id);
            let color = self.collection.marker_color(id);
            self.picker.request_open(color);
            events.push(MarkerEvent::ColorPickerOpened { id, color });
        }
    }

    fn update_marker(
        &mut self,
        frame: &PointerFrame,
        new_color: Rgba,
        events: &mut Vec<MarkerEvent>,
    ) {
        let popup_open = self.picker.is_open();

        if frame.clicked && !popup_open {
            self.interaction.clicked_marker = self.marker_under_pointer(frame.position);
            if let HitTarget::Marker(id) = self.interaction.clicked_marker {
                self.collection.select_marker(id);
                events.push(MarkerEvent::MarkerClicked { id });
            }
        }

        let clicked = self.interaction.clicked_marker;
        if clicked.marker_id().is_some() && frame.dragging && !popup_open {
            self.interaction.marker_added = false;
            let id = self.collection.selected_marker_id();
            self.collection
                .move_marker(id, self.marker_pos_from_pointer(frame.position));
            events.push(MarkerEvent::MarkerMoved {
                id,
                position: self.collection.marker_pos(id),
            });
        } else if clicked == HitTarget::EmptyRegion
            && frame.clicked
            && !popup_open
            && self.collection.len() < self.config.max_marker_count
        {
            let id = self.collection.reserve_marker_id();
            let position = self.marker_pos_from_pointer(frame.position);
            self.collection
                .add_marker(id, position, new_color, DEFAULT_MIDPOINT_RATIO);
            self.interaction.marker_added = true;

            // the new marker is grabbed so the same gesture can drag it
            self.collection.select_marker(id);
            self.interaction.clicked_marker = HitTarget::Marker(id);

            debug!("added marker {id} at {position}");
            events.push(MarkerEvent::MarkerAdded {
                id,
                position: self.collection.marker_pos(id),
                color: new_color,
            });
        } else {
            self.interaction.marker_added = false;
        }
    }

    fn update_midpoint(&mut self, frame: &PointerFrame, events: &mut Vec<MarkerEvent>) {
        let popup_open = self.picker.is_open();

        if frame.clicked && !popup_open {
            self.interaction.clicked_midpoint = self.midpoint_under_pointer(frame.position);
            if let HitTarget::Midpoint(id) = self.interaction.clicked_midpoint {
                self.collection.select_midpoint(id);
                events.push(MarkerEvent::MidpointClicked { id });
            }
        }

        if let HitTarget::Midpoint(id) = self.interaction.clicked_midpoint {
            if frame.dragging && !popup_open {
                self.collection.select_midpoint(id);
                self.collection
                    .move_midpoint(id, self.marker_pos_from_pointer(frame.position));
                events.push(MarkerEvent::MidpointMoved {
                    id,
                    ratio: self.collection.midpoint_ratio(id),
                });
            }
        }
    }

    fn update_color_picker(&mut self) {
        self.picker.finish_frame();
        if self.picker.is_open() {
            self.collection.set_selected_marker_color(self.picker.current());
        }
    }
}
