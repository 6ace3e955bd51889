use serde::{Deserialize, Serialize};

/// An RGBA color with each channel in `0.0..=1.0`.
pub type Rgba = [f32; 4];

pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// The default midpoint ratio, halfway between two markers.
pub const DEFAULT_MIDPOINT_RATIO: f32 = 0.5;

/// Clamps a data-space value into `0.0..=1.0`. `NaN` collapses to `0.0`.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The interpolation bias point between a marker and the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Midpoint {
    /// Where the midpoint sits between this marker and the next, from `0.0` to `1.0`.
    pub ratio: f32,
    /// Absolute gradient position derived from `ratio` and the neighboring markers.
    ///
    /// Recomputed by every operation that moves markers; never persisted.
    pub pos: f32,
}

impl Default for Midpoint {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_MIDPOINT_RATIO,
            pos: 0.0,
        }
    }
}

/// A single gradient color stop.
///
/// The midpoint of the last marker in position order is unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: i32,
    pub pos: f32,
    pub color: Rgba,
    pub midpoint: Midpoint,
}

impl Marker {
    pub fn new(id: i32, pos: f32, color: Rgba, midpoint_ratio: f32) -> Self {
        Self {
            id,
            pos: clamp_unit(pos),
            color,
            midpoint: Midpoint {
                ratio: clamp_unit(midpoint_ratio),
                pos: 0.0,
            },
        }
    }
}

/// The persisted form of a marker.
///
/// Only `position`, `color` and `midpoint_ratio` are real state; ids and absolute
/// midpoint positions are rebuilt on import.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStop {
    pub position: f32,
    pub color: Rgba,
    /// Absent on the last stop, which owns no midpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midpoint_ratio: Option<f32>,
}

impl MarkerStop {
    pub fn new(position: f32, color: Rgba) -> Self {
        Self {
            position,
            color,
            midpoint_ratio: None,
        }
    }

    pub fn with_midpoint(mut self, ratio: f32) -> Self {
        self.midpoint_ratio = Some(ratio);
        self
    }
}

impl From<&MarkerStop> for Marker {
    fn from(stop: &MarkerStop) -> Self {
        Marker::new(
            0,
            stop.position,
            stop.color,
            stop.midpoint_ratio.unwrap_or(DEFAULT_MIDPOINT_RATIO),
        )
    }
}

/// The two stops every collection starts from: black at `0.0`, white at `1.0`.
pub fn default_markers() -> Vec<Marker> {
    vec![
        Marker {
            id: 0,
            pos: 0.0,
            color: BLACK,
            midpoint: Midpoint {
                ratio: DEFAULT_MIDPOINT_RATIO,
                pos: 0.5,
            },
        },
        Marker {
            id: 1,
            pos: 1.0,
            color: WHITE,
            midpoint: Midpoint::default(),
        },
    ]
}
