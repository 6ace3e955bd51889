use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Upper bound on markers created interactively.
///
/// Defaults to `30` and can be overridden at build time by setting the
/// `GRADIENT_MARKERS_MAX_COUNT` environment variable to an integer of at least `2`.
pub const MAX_MARKER_COUNT: usize = match option_env!("GRADIENT_MARKERS_MAX_COUNT") {
    Some(value) => parse_marker_count(value),
    None => 30,
};

/// Default width in pixels of marker and midpoint glyphs.
pub const DEFAULT_MARKER_WIDTH: f32 = 20.0;

const fn parse_marker_count(value: &str) -> usize {
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "GRADIENT_MARKERS_MAX_COUNT must not be empty");
    let mut count = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        assert!(
            bytes[i].is_ascii_digit(),
            "GRADIENT_MARKERS_MAX_COUNT must be an integer"
        );
        count = count * 10 + (bytes[i] - b'0') as usize;
        i += 1;
    }
    assert!(count >= 2, "GRADIENT_MARKERS_MAX_COUNT must be at least 2");
    count
}

bitflags! {
    /// Layout and behavior switches for a gradient editor widget.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct GradientEditorFlags: u32 {
        /// Hides the midpoint strip; midpoints cannot be dragged.
        const NO_MIDPOINT = 1 << 1;
        /// Hides the marker strip; markers cannot be clicked, dragged or added.
        const NO_MARKER = 1 << 2;
        /// Lets the gradient span the full width instead of insetting it by half a
        /// marker on each side so end markers line up with the gradient edges.
        const NOT_ALIGN_SIDE_TO_MARKER = 1 << 3;
        /// New markers take the gradient color under the click instead of the
        /// selected marker's color.
        const NEW_MARKER_COLOR_FROM_CLICK = 1 << 4;
    }
}

/// What a double click on a marker does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClickAction {
    /// Select the marker and open the color picker popup.
    #[default]
    OpenColorPicker,
    /// Only report the double click; the caller decides what happens.
    EmitOnly,
}

/// Sizing and limits for a [`GradientMarkerManager`](crate::GradientMarkerManager).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Marker glyph width in pixels. Also sizes midpoints and marker height.
    pub marker_width: f32,
    /// Clicking the empty marker strip adds markers only below this count.
    pub max_marker_count: usize,
    #[serde(default)]
    pub double_click_action: ClickAction,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            marker_width: DEFAULT_MARKER_WIDTH,
            max_marker_count: MAX_MARKER_COUNT,
            double_click_action: ClickAction::default(),
        }
    }
}

impl MarkerConfig {
    pub fn with_marker_width(mut self, width: f32) -> Self {
        self.marker_width = width;
        self
    }

    pub fn with_max_marker_count(mut self, count: usize) -> Self {
        self.max_marker_count = count;
        self
    }

    pub fn with_double_click_action(mut self, action: ClickAction) -> Self {
        self.double_click_action = action;
        self
    }

    pub fn marker_height(&self) -> f32 {
        self.marker_width
    }

    pub fn midpoint_width(&self) -> f32 {
        self.marker_width
    }

    pub fn triangle_height(&self) -> f32 {
        (self.marker_width * 0.5).floor()
    }

    /// Height of the marker strip: the color square plus the pointer triangle.
    pub fn marker_region_height(&self) -> f32 {
        self.marker_height() + self.triangle_height()
    }
}
