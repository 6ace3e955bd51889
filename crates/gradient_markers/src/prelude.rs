pub use crate::collection::MarkerCollection;
pub use crate::config::{ClickAction, GradientEditorFlags, MAX_MARKER_COUNT, MarkerConfig};
pub use crate::gradient::{ColorSpace, GradientData, InterpolationPath};
pub use crate::interaction::{HitTarget, MarkerEvent, PointerFrame};
pub use crate::manager::GradientMarkerManager;
pub use crate::marker::{BLACK, Marker, MarkerStop, Rgba, WHITE};
pub use crate::plugin::{
    GradientEditor, GradientEditorSystems, GradientMarkerEvent, GradientMarkersPlugin,
    PointerTracker,
};
pub use crate::preset::{GradientPreset, GradientPresetLibrary};
pub use crate::region::{MarkerRegions, layout_regions};
