use std::path::Path;

use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gradient::{ColorSpace, DEFAULT_BLUR_WIDTH, GradientData, InterpolationPath};
use crate::marker::{DEFAULT_MIDPOINT_RATIO, MarkerStop, Rgba, WHITE};
/// Version tag written into every preset file. Files with any other tag are
/// rejected.
pub const PRESET_FORMAT_VERSION: &str = "1";

const DEFAULT_LIBRARY_RON: &str = include_str!("default.gradients.ron");

/// Asset loader for [`GradientPresetLibrary`] files in RON format.
#[derive(Default, TypePath)]
pub struct GradientPresetLoader;

/// Errors raised while reading or writing a [`GradientPresetLibrary`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GradientPresetError {
    /// The preset file could not be read or written.
    #[error("Could not access preset file: {0}")]
    Io(#[from] std::io::Error),
    /// The preset file contained invalid RON syntax.
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// The library could not be serialized.
    #[error("Could not serialize presets: {0}")]
    Serialize(#[from] ron::Error),
    /// The file was written with a different `format_version`.
    #[error(
        "Unsupported format_version \"{found}\", expected \"{expected}\"",
        expected = PRESET_FORMAT_VERSION
    )]
    UnsupportedVersion { found: String },
}

impl AssetLoader for GradientPresetLoader {
    type Asset = GradientPresetLibrary;
    type Settings = ();
    type Error = GradientPresetError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let library = ron::de::from_bytes::<GradientPresetLibrary>(&bytes)?;
        library.check_version().inspect_err(|err| {
            warn!("{:?}: {err}", load_context.path());
        })
    }

    fn extensions(&self) -> &[&str] {
        &["gradients.ron"]
    }
}

/// A named gradient as stored on disk.
///
/// Colors are `"0xRRGGBBAA"` strings. `midpoints` holds one ratio per span, so it
/// is one shorter than `colors`. Unknown fields are a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientPreset {
    pub name: String,
    pub colors: Vec<String>,
    pub positions: Vec<f32>,
    pub midpoints: Vec<f32>,
    #[serde(default = "default_blur_width")]
    pub blur_width: f32,
    #[serde(default)]
    pub color_space: ColorSpace,
    #[serde(default)]
    pub interpolation_path: InterpolationPath,
}

fn default_blur_width() -> f32 {
    DEFAULT_BLUR_WIDTH
}

impl Default for GradientPreset {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: vec!["0x000000FF".to_string(), "0xFFFFFFFF".to_string()],
            positions: vec![0.0, 1.0],
            midpoints: vec![DEFAULT_MIDPOINT_RATIO],
            blur_width: default_blur_width(),
            color_space: ColorSpace::default(),
            interpolation_path: InterpolationPath::default(),
        }
    }
}

impl GradientPreset {
    /// Captures the current stops and blend settings of `gradient`.
    pub fn from_gradient(name: impl Into<String>, gradient: &GradientData) -> Self {
        let collection = gradient.markers.collection();
        Self {
            name: name.into(),
            colors: collection.colors().iter().map(|c| format_hex_color(*c)).collect(),
            positions: collection.positions(),
            midpoints: collection.midpoint_ratios(),
            blur_width: gradient.blur_width,
            color_space: gradient.color_space,
            interpolation_path: gradient.interpolation_path,
        }
    }

    /// Stops described by this preset. Extra colors or positions without a
    /// partner are ignored, a missing midpoint falls back to `0.5` and an
    /// unreadable color to white.
    pub fn stops(&self) -> Vec<MarkerStop> {
        let count = self.colors.len().min(self.positions.len());
        (0..count)
            .map(|i| {
                let color = parse_hex_color(&self.colors[i]).unwrap_or_else(|| {
                    warn!("preset \"{}\": invalid color \"{}\"", self.name, self.colors[i]);
                    WHITE
                });
                let stop = MarkerStop::new(self.positions[i], color);
                if i + 1 < count {
                    stop.with_midpoint(
                        self.midpoints
                            .get(i)
                            .copied()
                            .unwrap_or(DEFAULT_MIDPOINT_RATIO),
                    )
                } else {
                    stop
                }
            })
            .collect()
    }

    pub fn to_gradient(&self) -> GradientData {
        GradientData::from_stops(&self.stops())
            .with_color_space(self.color_space)
            .with_interpolation_path(self.interpolation_path)
            .with_blur_width(self.blur_width)
    }

    /// Loads this preset into an existing editor, keeping its configuration.
    pub fn apply_to(&self, gradient: &mut GradientData) {
        gradient.replace_from(&self.to_gradient());
    }
}

/// An ordered, user-editable collection of presets.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientPresetLibrary {
    format_version: String,
    pub presets: Vec<GradientPreset>,
}

impl Default for GradientPresetLibrary {
    fn default() -> Self {
        Self::new(vec![GradientPreset::default()])
    }
}

impl GradientPresetLibrary {
    pub fn new(presets: Vec<GradientPreset>) -> Self {
        Self {
            format_version: PRESET_FORMAT_VERSION.to_string(),
            presets,
        }
    }

    /// The library shipped with the crate, written out when no preset file exists
    /// yet.
    pub fn builtin() -> Self {
        match Self::from_ron_str(DEFAULT_LIBRARY_RON) {
            Ok(library) => library,
            Err(err) => {
                error!("built-in preset library is invalid: {err}");
                Self::default()
            }
        }
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GradientPreset> {
        self.presets.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&GradientPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    fn contains_name(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Appends `preset` under `name`, suffixing `_copy` until the name is unused.
    /// Returns the name that was stored.
    pub fn add(&mut self, mut preset: GradientPreset, name: &str) -> &str {
        let mut candidate = name.to_string();
        while self.contains_name(&candidate) {
            candidate.push_str("_copy");
        }
        preset.name = candidate;
        self.presets.push(preset);
        &self.presets[self.presets.len() - 1].name
    }

    /// Replaces the preset at `index`, renaming it to `name`. Duplicate names are
    /// allowed here. Returns `false` when `index` is out of range.
    pub fn overwrite(&mut self, index: usize, mut preset: GradientPreset, name: &str) -> bool {
        let Some(slot) = self.presets.get_mut(index) else {
            return false;
        };
        preset.name = name.to_string();
        *slot = preset;
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<GradientPreset> {
        (index < self.presets.len()).then(|| self.presets.remove(index))
    }

    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.presets.len() || b >= self.presets.len() {
            return false;
        }
        self.presets.swap(a, b);
        true
    }

    pub fn from_ron_str(source: &str) -> Result<Self, GradientPresetError> {
        ron::de::from_str::<Self>(source)?.check_version()
    }

    pub fn to_ron_string(&self) -> Result<String, GradientPresetError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GradientPresetError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    /// Writes the library to `path`, creating or truncating the file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GradientPresetError> {
        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Loads the library at `path`, falling back to the built-in presets when the
    /// file is missing or unreadable.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            warn!("{path:?}: {err}, using built-in presets");
            Self::builtin()
        })
    }

    fn check_version(self) -> Result<Self, GradientPresetError> {
        if self.format_version == PRESET_FORMAT_VERSION {
            Ok(self)
        } else {
            Err(GradientPresetError::UnsupportedVersion {
                found: self.format_version,
            })
        }
    }
}

/// Parses `"0xRRGGBBAA"` into normalized RGBA.
pub fn parse_hex_color(text: &str) -> Option<Rgba> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.len() != 8 {
        return None;
    }
    let packed = u32::from_str_radix(digits, 16).ok()?;
    Some(packed.to_be_bytes().map(|channel| channel as f32 / 255.0))
}

/// Formats normalized RGBA as `"0xRRGGBBAA"`, rounding each channel.
pub fn format_hex_color(color: Rgba) -> String {
    let bytes = color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
    format!("0x{:08X}", u32::from_be_bytes(bytes))
}
