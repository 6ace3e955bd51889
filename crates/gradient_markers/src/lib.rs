//! **gradient_markers** is the marker model and pointer state machine behind a
//! gradient editor widget, with an optional [Bevy](https://bevyengine.org/)
//! plugin that drives editors from window input.
//!
//! # Markers
//!
//! A gradient is a list of color stops ("markers") on the `0.0..=1.0` axis. Every
//! marker but the last owns a midpoint: the ratio along the span to the next
//! marker at which the blend reaches 50%. [`MarkerCollection`] keeps markers
//! sorted, never lets the count drop below two and renumbers ids whenever the
//! structure changes.
//!
//! ```
//! use gradient_markers::prelude::*;
//!
//! let mut markers = MarkerCollection::new();
//! let id = markers.reserve_marker_id();
//! markers.add_marker(id, 0.25, [1.0, 0.0, 0.0, 1.0], 0.5);
//! markers.reverse_markers();
//!
//! assert_eq!(markers.positions(), vec![0.0, 0.75, 1.0]);
//! ```
//!
//! # Driving an editor
//!
//! [`GradientMarkerManager`] owns one editor's markers. Each frame, set the three
//! screen regions (or compute them with [`layout_regions`]), then hand it the
//! pointer state:
//!
//! ```
//! use bevy::math::Vec2;
//! use gradient_markers::prelude::*;
//!
//! let config = MarkerConfig::default();
//! let mut manager = GradientMarkerManager::new(config);
//! manager.set_regions(layout_regions(
//!     Vec2::ZERO,
//!     220.0,
//!     30.0,
//!     &config,
//!     GradientEditorFlags::empty(),
//! ));
//!
//! // click the empty marker strip halfway along the gradient
//! let events = manager.process_frame(&PointerFrame::click(Vec2::new(110.0, 60.0)), WHITE);
//! assert!(matches!(events[..], [MarkerEvent::MarkerAdded { id: 2, .. }]));
//! ```
//!
//! With Bevy, add [`GradientMarkersPlugin`] and spawn [`GradientEditor`]
//! components instead; events arrive as [`GradientMarkerEvent`] on the editor
//! entity.
//!
//! # Presets
//!
//! [`GradientPresetLibrary`] holds named gradients in `*.gradients.ron` files,
//! loadable as Bevy assets or directly from disk.

pub mod collection;
pub mod config;
pub mod gradient;
pub mod interaction;
pub mod manager;
pub mod marker;
pub mod plugin;
pub mod prelude;
pub mod preset;
pub mod region;

pub use collection::MarkerCollection;
pub use config::{ClickAction, GradientEditorFlags, MAX_MARKER_COUNT, MarkerConfig};
pub use gradient::{ColorSpace, GradientData, GradientSegment, GradientUniform, InterpolationPath};
pub use interaction::{ColorPickerState, HitTarget, MarkerEvent, PointerFrame};
pub use manager::GradientMarkerManager;
pub use marker::{Marker, MarkerStop, Midpoint, Rgba};
pub use plugin::{GradientEditor, GradientMarkerEvent, GradientMarkersPlugin, PointerTracker};
pub use preset::{GradientPreset, GradientPresetError, GradientPresetLibrary};
pub use region::{MarkerRegions, layout_regions};
