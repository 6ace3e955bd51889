use super::helpers::*;

use bevy::asset::{AssetServer, Handle};
use gradient_markers::prelude::*;
use gradient_markers::preset::PRESET_FORMAT_VERSION;

#[test]
fn load_default_library() {
    let mut app = create_minimal_app();
    let library = load_library(&mut app, "default.gradients.ron");

    assert_eq!(library.len(), 5);
    assert_eq!(library, GradientPresetLibrary::builtin());

    let blue_yellow = library.find("blue-yellow").expect("preset should exist");
    assert_eq!(blue_yellow.color_space, ColorSpace::Oklch);
}

#[test]
fn load_library_with_omitted_settings() {
    let mut app = create_minimal_app();
    let library = load_library(&mut app, "minimal.gradients.ron");

    assert_eq!(library.format_version(), PRESET_FORMAT_VERSION);
    let sunset = &library.presets[0];
    assert_eq!(sunset.interpolation_path, InterpolationPath::Short);
    assert_eq!(sunset.blur_width, 1.0);

    let gradient = sunset.to_gradient();
    assert_eq!(gradient.color_space, ColorSpace::Oklab);
    assert_eq!(gradient.markers.collection().midpoint_ratios(), vec![0.35, 0.6]);
}

#[test]
fn unknown_version_fails_to_load() {
    let mut app = create_minimal_app();
    let handle: Handle<GradientPresetLibrary> = app
        .world()
        .resource::<AssetServer>()
        .load("unknown_version.gradients.ron");
    assert!(!run_until_loaded(&mut app, &handle, 100));
}

#[test]
fn malformed_file_fails_to_load() {
    let mut app = create_minimal_app();
    let handle: Handle<GradientPresetLibrary> = app
        .world()
        .resource::<AssetServer>()
        .load("malformed.gradients.ron");
    assert!(!run_until_loaded(&mut app, &handle, 100));
}

#[test]
fn loaded_preset_applies_to_spawned_editor() {
    let mut app = create_minimal_app();
    let library = load_library(&mut app, "default.gradients.ron");
    let entity = spawn_editor(&mut app, &MarkerCollection::new().to_stops());

    let gold = library.find("gold").expect("preset should exist");
    {
        let mut editor = app
            .world_mut()
            .get_mut::<GradientEditor>(entity)
            .expect("editor should exist");
        gold.apply_to(&mut editor.data);
    }

    let editor = editor(&app, entity);
    assert_eq!(editor.data.markers.markers().len(), 6);
    assert_eq!(editor.data.color_space, ColorSpace::LinearSrgb);
    // regions survive preset loads
    assert_eq!(editor.data.markers.regions(), &test_regions());
}
