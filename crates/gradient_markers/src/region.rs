use bevy::math::{Rect, Vec2};

use crate::config::{GradientEditorFlags, MarkerConfig};

/// The three screen-space strips a gradient editor draws into.
///
/// The rendering layer refreshes these every frame; the marker manager only
/// uses them to map pointer positions into gradient space and to hit-test glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerRegions {
    /// Strip above the gradient holding midpoint diamonds.
    pub midpoint: Rect,
    /// The gradient preview itself. Defines the `0.0..=1.0` horizontal axis.
    pub gradient: Rect,
    /// Strip below the gradient holding marker glyphs.
    pub marker: Rect,
}

impl MarkerRegions {
    pub fn set_midpoint_region(&mut self, p0: Vec2, p1: Vec2) {
        self.midpoint = Rect::from_corners(p0, p1);
    }

    pub fn set_gradient_region(&mut self, p0: Vec2, p1: Vec2) {
        self.gradient = Rect::from_corners(p0, p1);
    }

    pub fn set_marker_region(&mut self, p0: Vec2, p1: Vec2) {
        self.marker = Rect::from_corners(p0, p1);
    }

    /// Pointer position relative to the gradient's top-left corner.
    pub fn pointer_on_gradient(&self, pointer: Vec2) -> Vec2 {
        pointer - self.gradient.min
    }

    /// Maps a pointer position to a gradient position in `0.0..=1.0`.
    ///
    /// Returns `0.0` while the gradient strip has no width.
    pub fn gradient_pos_from_pointer(&self, pointer: Vec2) -> f32 {
        let width = self.gradient.width();
        if width <= 0.0 {
            return 0.0;
        }
        (self.pointer_on_gradient(pointer).x / width).clamp(0.0, 1.0)
    }

    /// Screen x of a marker center at gradient position `pos`.
    pub fn marker_center_x(&self, pos: f32) -> f32 {
        self.gradient.min.x + self.gradient.width() * pos
    }

    /// Screen x of a midpoint center at gradient position `pos`.
    pub fn midpoint_center_x(&self, pos: f32) -> f32 {
        self.midpoint.min.x + self.midpoint.width() * pos
    }

    /// Rectangle covered by the marker glyph at gradient position `pos`.
    pub fn marker_glyph(&self, pos: f32, marker_width: f32) -> Rect {
        let center = self.marker_center_x(pos);
        let half = marker_width * 0.5;
        Rect {
            min: Vec2::new(center - half, self.marker.min.y),
            max: Vec2::new(center + half, self.marker.max.y),
        }
    }

    /// Rectangle covered by the midpoint glyph at gradient position `pos`.
    pub fn midpoint_glyph(&self, pos: f32, midpoint_width: f32) -> Rect {
        let center = self.midpoint_center_x(pos);
        let half = midpoint_width * 0.5;
        Rect {
            min: Vec2::new(center - half, self.midpoint.min.y),
            max: Vec2::new(center + half, self.midpoint.max.y),
        }
    }

    /// Whether the pointer is inside the marker strip, widened by half a marker on
    /// both sides so the end markers stay reachable.
    pub fn in_marker_strip(&self, pointer: Vec2, marker_width: f32) -> bool {
        let half = marker_width * 0.5;
        pointer.x >= self.marker.min.x - half
            && pointer.x < self.marker.max.x + half
            && pointer.y >= self.marker.min.y
            && pointer.y < self.marker.max.y
    }

    pub fn in_midpoint_strip(&self, pointer: Vec2) -> bool {
        pointer.x >= self.midpoint.min.x
            && pointer.x < self.midpoint.max.x
            && pointer.y >= self.midpoint.min.y
            && pointer.y < self.midpoint.max.y
    }
}

/// Glyphs test inclusively on every edge, unlike the half-open strips.
pub(crate) fn glyph_contains(glyph: Rect, pointer: Vec2) -> bool {
    pointer.x >= glyph.min.x
        && pointer.x <= glyph.max.x
        && pointer.y >= glyph.min.y
        && pointer.y <= glyph.max.y
}

/// Lays out the three strips for a widget whose top-left corner is `origin`.
///
/// Strips stack top to bottom: midpoints, gradient of height `gradient_height`,
/// markers. Unless [`GradientEditorFlags::NOT_ALIGN_SIDE_TO_MARKER`] is set every
/// strip is inset by half a marker width on each side so the end markers center on
/// the gradient edges. Hidden strips collapse to zero height.
pub fn layout_regions(
    origin: Vec2,
    width: f32,
    gradient_height: f32,
    config: &MarkerConfig,
    flags: GradientEditorFlags,
) -> MarkerRegions {
    let (left, strip_width) = if flags.contains(GradientEditorFlags::NOT_ALIGN_SIDE_TO_MARKER) {
        (origin.x, width)
    } else {
        (
            origin.x + config.marker_width * 0.5,
            (width - config.marker_width).max(0.0),
        )
    };

    let mut y = origin.y;
    let mut strip = |height: f32| {
        let rect = Rect::new(left, y, left + strip_width, y + height);
        y += height;
        rect
    };

    let midpoint_height = if flags.contains(GradientEditorFlags::NO_MIDPOINT) {
        0.0
    } else {
        config.midpoint_width()
    };
    let marker_height = if flags.contains(GradientEditorFlags::NO_MARKER) {
        0.0
    } else {
        config.marker_region_height()
    };

    MarkerRegions {
        midpoint: strip(midpoint_height),
        gradient: strip(gradient_height),
        marker: strip(marker_height),
    }
}
