use bevy::math::Vec2;

use crate::marker::Rgba;

/// Pointer state for one frame, as reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerFrame {
    pub position: Vec2,
    /// The left button went down this frame.
    pub clicked: bool,
    /// The left button is held and has moved past the drag threshold.
    pub dragging: bool,
    /// This frame's click completed a double click.
    pub double_clicked: bool,
}

impl PointerFrame {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn click(position: Vec2) -> Self {
        Self {
            position,
            clicked: true,
            ..Default::default()
        }
    }

    pub fn drag(position: Vec2) -> Self {
        Self {
            position,
            dragging: true,
            ..Default::default()
        }
    }

    pub fn double_click(position: Vec2) -> Self {
        Self {
            position,
            clicked: true,
            double_clicked: true,
            ..Default::default()
        }
    }
}

/// What lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitTarget {
    /// A marker glyph, by marker id.
    Marker(i32),
    /// A midpoint glyph, by the id of the marker that owns it.
    Midpoint(i32),
    /// Inside a strip but not on any glyph.
    EmptyRegion,
    #[default]
    Outside,
}

impl HitTarget {
    pub fn marker_id(self) -> Option<i32> {
        match self {
            HitTarget::Marker(id) => Some(id),
            _ => None,
        }
    }

    pub fn midpoint_id(self) -> Option<i32> {
        match self {
            HitTarget::Midpoint(id) => Some(id),
            _ => None,
        }
    }
}

/// Something the interaction state machine did during a frame.
///
/// Callers that want to override the default reaction to a click switch on these
/// instead of registering callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerEvent {
    MarkerClicked { id: i32 },
    MarkerDoubleClicked { id: i32 },
    MarkerAdded { id: i32, position: f32, color: Rgba },
    MarkerMoved { id: i32, position: f32 },
    MidpointClicked { id: i32 },
    MidpointMoved { id: i32, ratio: f32 },
    ColorPickerOpened { id: i32, color: Rgba },
}

/// Transient click/drag state carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    /// Target under the pointer at the last left-button press on the marker strip.
    pub clicked_marker: HitTarget,
    /// Target under the pointer at the last left-button press on the midpoint strip.
    pub clicked_midpoint: HitTarget,
    /// Set for the single frame in which a click created a marker.
    pub marker_added: bool,
}

/// The embedded color picker popup opened by double clicking a marker.
///
/// While open, the picker's current color is written to the selected marker every
/// frame and every other click or drag on the editor is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPickerState {
    is_open: bool,
    open_requested: bool,
    current: Rgba,
    backup: Rgba,
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self {
            is_open: false,
            open_requested: false,
            current: crate::marker::WHITE,
            backup: crate::marker::WHITE,
        }
    }
}

impl ColorPickerState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current(&self) -> Rgba {
        self.current
    }

    pub fn backup(&self) -> Rgba {
        self.backup
    }

    pub fn set_current(&mut self, color: Rgba) {
        self.current = color;
    }

    pub fn set_backup(&mut self, color: Rgba) {
        self.backup = color;
    }

    /// Requests the popup for a marker of `color`, which fills both the current and
    /// the previous slot. The popup opens when the frame finishes, so the click that
    /// opened it is still processed normally.
    pub fn request_open(&mut self, color: Rgba) {
        self.backup = color;
        self.current = color;
        self.open_requested = true;
    }

    /// Copies the previous color back into the current slot.
    pub fn restore_previous(&mut self) {
        self.current = self.backup;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.open_requested = false;
    }

    pub(crate) fn finish_frame(&mut self) {
        if self.open_requested {
            self.is_open = true;
            self.open_requested = false;
        }
    }
}
