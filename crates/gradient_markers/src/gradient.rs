use bevy::prelude::*;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::config::{GradientEditorFlags, MAX_MARKER_COUNT, MarkerConfig};
use crate::manager::GradientMarkerManager;
use crate::marker::MarkerStop;

/// Color space the external gradient shader interpolates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Reflect)]
pub enum ColorSpace {
    #[default]
    Srgb,
    LinearSrgb,
    Hsv,
    Hsl,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 8] = [
        ColorSpace::Srgb,
        ColorSpace::LinearSrgb,
        ColorSpace::Hsv,
        ColorSpace::Hsl,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Oklab,
        ColorSpace::Oklch,
    ];

    /// Display name, also used by host effect parameters.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::LinearSrgb => "Linear sRGB",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Hsl => "HSL",
            ColorSpace::Lab => "L*a*b",
            ColorSpace::Lch => "LCh",
            ColorSpace::Oklab => "Oklab",
            ColorSpace::Oklch => "Oklch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|space| space.name() == name)
    }

    /// Index understood by the shader.
    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Whether the space has a hue channel, which makes
    /// [`InterpolationPath`] meaningful.
    pub fn is_cylindrical(self) -> bool {
        matches!(
            self,
            ColorSpace::Hsv | ColorSpace::Hsl | ColorSpace::Lch | ColorSpace::Oklch
        )
    }
}

/// Which way around the hue circle cylindrical color spaces interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Reflect)]
pub enum InterpolationPath {
    #[default]
    Short,
    Long,
}

impl InterpolationPath {
    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(InterpolationPath::Short),
            1 => Some(InterpolationPath::Long),
            _ => None,
        }
    }
}

/// One span between two adjacent markers, laid out for the gradient shader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GradientSegment {
    pub start_color: [f32; 4],
    pub stop_color: [f32; 4],
    pub start_pos: f32,
    pub stop_pos: f32,
    pub ratio: f32,
    _pad: f32,
}

/// Uniform block consumed by the external gradient shader.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct GradientUniform {
    pub segments: [GradientSegment; MAX_MARKER_COUNT],
    pub segment_count: i32,
    pub color_space: i32,
    pub interpolation_path: i32,
    pub blur_width: f32,
    pub texture_size: [f32; 2],
    pub display_size: [f32; 2],
}

pub const DEFAULT_BLUR_WIDTH: f32 = 1.0;

/// A complete editable gradient: its markers plus how they are blended.
#[derive(Debug, Clone)]
pub struct GradientData {
    pub markers: GradientMarkerManager,
    pub color_space: ColorSpace,
    pub interpolation_path: InterpolationPath,
    /// Edge softness between segments, `1.0` being a full blend.
    pub blur_width: f32,
}

impl Default for GradientData {
    fn default() -> Self {
        Self {
            markers: GradientMarkerManager::default(),
            color_space: ColorSpace::default(),
            interpolation_path: InterpolationPath::default(),
            blur_width: DEFAULT_BLUR_WIDTH,
        }
    }
}

impl GradientData {
    pub fn new(config: MarkerConfig, flags: GradientEditorFlags) -> Self {
        Self {
            markers: GradientMarkerManager::new(config).with_flags(flags),
            ..default()
        }
    }

    pub fn from_stops(stops: &[MarkerStop]) -> Self {
        let mut data = Self::default();
        data.markers.set_stops(stops);
        data
    }

    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    pub fn with_interpolation_path(mut self, path: InterpolationPath) -> Self {
        self.interpolation_path = path;
        self
    }

    pub fn with_blur_width(mut self, blur_width: f32) -> Self {
        self.blur_width = blur_width;
        self
    }

    /// Copies stops and blend settings from `other`, keeping this editor's
    /// configuration, regions and interaction state.
    pub fn replace_from(&mut self, other: &GradientData) {
        self.markers.set_stops(&other.markers.to_stops());
        self.color_space = other.color_space;
        self.interpolation_path = other.interpolation_path;
        self.blur_width = other.blur_width;
    }

    /// Back to a black to white gradient with default blend settings. Config,
    /// flags and regions are kept.
    pub fn reset(&mut self) {
        self.markers.collection_mut().reset_to_default();
        self.color_space = ColorSpace::default();
        self.interpolation_path = InterpolationPath::default();
        self.blur_width = DEFAULT_BLUR_WIDTH;
    }

    /// Every span between adjacent markers, left to right.
    pub fn segments(&self) -> Vec<GradientSegment> {
        self.markers
            .markers()
            .windows(2)
            .map(|pair| GradientSegment {
                start_color: pair[0].color,
                stop_color: pair[1].color,
                start_pos: pair[0].pos,
                stop_pos: pair[1].pos,
                ratio: pair[0].midpoint.ratio,
                _pad: 0.0,
            })
            .collect()
    }

    /// Packs the gradient for the shader. Segments beyond the uniform's capacity
    /// are dropped.
    pub fn uniform(&self, texture_size: Vec2, display_size: Vec2) -> GradientUniform {
        let mut uniform = GradientUniform::zeroed();
        let segments = self.segments();
        let count = segments.len().min(MAX_MARKER_COUNT);
        uniform.segments[..count].copy_from_slice(&segments[..count]);
        uniform.segment_count = count as i32;
        uniform.color_space = self.color_space.index();
        uniform.interpolation_path = self.interpolation_path.index();
        uniform.blur_width = self.blur_width;
        uniform.texture_size = texture_size.to_array();
        uniform.display_size = display_size.to_array();
        uniform
    }
}
