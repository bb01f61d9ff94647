//! End-to-end editor flows without a window

use std::path::PathBuf;

use engine_core::components::{Camera, Transform};
use engine_core::objects::SceneObjectKind;
use engine_editor::{
    Axis, DialogResponse, EditorSession, FileDialog, FileFilter, ImportOutcome, ImportPhase,
    MenuAction, PropertyEdit, PropertyEditor,
};
use engine_render::texture::{ImageTextureLoader, TextureKind};
use glam::Vec3;

struct PickPath(PathBuf);

impl FileDialog for PickPath {
    fn open_file(&mut self, filters: &[FileFilter]) -> DialogResponse {
        assert!(filters.iter().any(|f| f.extensions.iter().any(|e| e == "png")));
        DialogResponse::okay(self.0.clone())
    }
}

#[test]
fn import_texture_and_bind_it_to_a_cube() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");
    image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 255]))
        .save(&path)
        .unwrap();

    let mut session = EditorSession::default();
    session.apply(MenuAction::ImportTexture).unwrap();
    assert_eq!(session.import.phase(), ImportPhase::Empty);

    session.import.browse(&mut PickPath(path));
    session.import.set_kind(TextureKind::Diffuse);
    let before = session.assets.len();
    let ImportOutcome::Loaded(id) = session
        .import
        .finish(&mut session.assets, &ImageTextureLoader)
    else {
        panic!("import should succeed");
    };
    assert_eq!(session.assets.len(), before + 1);
    assert_eq!(session.assets.get(id).unwrap().name(), "checker");

    let cube = session.create_object(SceneObjectKind::Cube).unwrap();
    PropertyEditor::apply(
        &mut session.world,
        &session.assets,
        cube,
        PropertyEdit::Diffuse(Some(id)),
    )
    .unwrap();
}

#[test]
fn closing_import_after_browse_keeps_asset_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unused.png");
    image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let mut session = EditorSession::default();
    session.apply(MenuAction::ImportTexture).unwrap();
    session.import.browse(&mut PickPath(path));
    assert_eq!(session.import.phase(), ImportPhase::PathChosen);

    session.import.close();
    assert_eq!(session.import.phase(), ImportPhase::Closed);
    assert!(session.assets.is_empty());

    // A Finish after closing must not load the remembered path.
    assert!(matches!(
        session.import.finish(&mut session.assets, &ImageTextureLoader),
        ImportOutcome::NotOpen
    ));
    assert!(session.assets.is_empty());
}

#[test]
fn selection_stays_closed_over_tracked_list() {
    let mut session = EditorSession::default();
    for i in 0..10 {
        let kind = if i % 2 == 0 {
            SceneObjectKind::Cube
        } else {
            SceneObjectKind::Camera
        };
        session.apply(MenuAction::NewObject(kind)).unwrap();
        let active = session.objects.active().unwrap();
        assert!(session.objects.contains(active));
    }

    let tracked: Vec<_> = session.objects.iter().collect();
    assert_eq!(tracked.len(), 10);
    for (i, a) in tracked.iter().enumerate() {
        for b in &tracked[i + 1..] {
            assert_ne!(a, b);
        }
    }

    let stray = session.world.create_entity();
    assert!(session.objects.select(stray).is_err());
    assert!(session.objects.contains(session.objects.active().unwrap()));
}

#[test]
fn edits_on_selected_camera_are_live() {
    let mut session = EditorSession::default();
    let camera = session.create_object(SceneObjectKind::Camera).unwrap();

    PropertyEditor::apply(
        &mut session.world,
        &session.assets,
        camera,
        PropertyEdit::Rotation(Axis::X, -30.0),
    )
    .unwrap();
    PropertyEditor::apply(
        &mut session.world,
        &session.assets,
        camera,
        PropertyEdit::Far(0.0),
    )
    .unwrap();

    let transform = *session.world.component::<Transform>(camera).unwrap();
    assert_eq!(transform.rotation, Vec3::new(-30.0, 0.0, 0.0));
    let params = *session.world.component::<Camera>(camera).unwrap();
    assert!(params.z_near < params.z_far);
}

#[test]
fn renaming_does_not_move_or_reidentify() {
    let mut session = EditorSession::default();
    let first = session.create_object(SceneObjectKind::Cube).unwrap();
    let second = session.create_object(SceneObjectKind::Cube).unwrap();

    session
        .objects
        .rename(&mut session.world, first, "Floor")
        .unwrap();
    assert_eq!(session.objects.iter().collect::<Vec<_>>(), [first, second]);
    assert_eq!(session.world.label(first).unwrap(), "Floor");
    assert_eq!(session.world.label(second).unwrap(), "Cube");
}
