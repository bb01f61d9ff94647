//! Texture import panel
//!
//! Closed -> Open(empty) -> Open(path chosen) -> Closed. Nothing reaches the
//! asset table until Finish succeeds, so closing the panel needs no cleanup.

use std::path::PathBuf;
use std::sync::Arc;

use egui::{Color32, Context};
use tracing::{debug, info, warn};

use engine_core::components::AssetId;
use engine_core::text::{
    BoundedString, IMPORT_PATH_CHARACTER_LIMIT, OBJECT_NAME_CHARACTER_LIMIT, Truncation,
};
use engine_render::asset_table::AssetTable;
use engine_render::error::AssetError;
use engine_render::texture::{TextureKind, TextureLoader};

/// Outcome reported by a file picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Okay,
    Cancel,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResponse {
    pub result: DialogResult,
    pub path: Option<PathBuf>,
}

impl DialogResponse {
    pub fn okay(path: impl Into<PathBuf>) -> Self {
        Self {
            result: DialogResult::Okay,
            path: Some(path.into()),
        }
    }

    pub fn cancel() -> Self {
        Self {
            result: DialogResult::Cancel,
            path: None,
        }
    }

    pub fn error() -> Self {
        Self {
            result: DialogResult::Error,
            path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Blocking file picker. Halts the frame until the operator answers.
pub trait FileDialog {
    fn open_file(&mut self, filters: &[FileFilter]) -> DialogResponse;
}

/// Native picker via rfd
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdFileDialog;

impl FileDialog for RfdFileDialog {
    fn open_file(&mut self, filters: &[FileFilter]) -> DialogResponse {
        let mut dialog = rfd::FileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
        }
        match dialog.pick_file() {
            Some(path) => DialogResponse::okay(path),
            None => DialogResponse::cancel(),
        }
    }
}

/// Inputs of an open import panel
#[derive(Debug, Clone)]
pub struct PendingImport {
    pub path: BoundedString,
    pub last_result: Option<DialogResult>,
    pub kind: TextureKind,
    pub name: BoundedString,
    /// Message from the last failed Finish, shown until the next attempt
    pub error: Option<String>,
}

impl Default for PendingImport {
    fn default() -> Self {
        Self {
            path: BoundedString::new(IMPORT_PATH_CHARACTER_LIMIT),
            last_result: None,
            kind: TextureKind::default(),
            name: BoundedString::new(OBJECT_NAME_CHARACTER_LIMIT),
            error: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum ImportState {
    #[default]
    Closed,
    Open(PendingImport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Closed,
    Empty,
    PathChosen,
}

#[derive(Debug)]
pub enum ImportOutcome {
    /// Finish pressed while the panel was closed
    NotOpen,
    /// No successful browse; the panel closed without loading
    Skipped,
    Loaded(AssetId),
    /// The loader rejected the file; the panel stays open
    Failed(AssetError),
}

#[derive(Debug, Default)]
pub struct ImportPanel {
    state: ImportState,
    filters: Vec<FileFilter>,
}

impl ImportPanel {
    pub fn new(filters: Vec<FileFilter>) -> Self {
        Self {
            state: ImportState::Closed,
            filters,
        }
    }

    /// Open with fresh inputs, discarding anything left from before
    pub fn open(&mut self) {
        self.state = ImportState::Open(PendingImport::default());
        debug!("Import panel opened");
    }

    /// Close without loading
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Import panel closed");
        }
        self.state = ImportState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ImportState::Open(_))
    }

    pub fn phase(&self) -> ImportPhase {
        match &self.state {
            ImportState::Closed => ImportPhase::Closed,
            ImportState::Open(pending) if pending.last_result == Some(DialogResult::Okay) => {
                ImportPhase::PathChosen
            }
            ImportState::Open(_) => ImportPhase::Empty,
        }
    }

    pub fn pending(&self) -> Option<&PendingImport> {
        match &self.state {
            ImportState::Open(pending) => Some(pending),
            ImportState::Closed => None,
        }
    }

    fn pending_mut(&mut self) -> Option<&mut PendingImport> {
        match &mut self.state {
            ImportState::Open(pending) => Some(pending),
            ImportState::Closed => None,
        }
    }

    /// Run the picker and record its result. Returns None if the panel is closed.
    pub fn browse(&mut self, dialog: &mut dyn FileDialog) -> Option<DialogResult> {
        let filters = self.filters.clone();
        let pending = self.pending_mut()?;
        pending.error = None;

        let response = dialog.open_file(&filters);
        let result = match (response.result, response.path) {
            (DialogResult::Okay, Some(path)) => match path.to_str() {
                Some(text) => match pending.path.set(text) {
                    Truncation::None => DialogResult::Okay,
                    Truncation::Truncated { dropped } => {
                        // A cut path names a different file; refuse to load it.
                        warn!(dropped, "Picked path exceeds the path field");
                        pending.error = Some("Path is too long".to_owned());
                        DialogResult::Error
                    }
                },
                None => {
                    warn!(path = %path.display(), "Picked path is not valid UTF-8");
                    pending.error = Some("Path is not valid UTF-8".to_owned());
                    DialogResult::Error
                }
            },
            (DialogResult::Okay, None) => DialogResult::Error,
            (result, _) => result,
        };

        debug!(result = ?result, "File dialog returned");
        pending.last_result = Some(result);
        Some(result)
    }

    /// Edit the path field by hand
    pub fn set_path(&mut self, text: &str) -> Option<Truncation> {
        Some(self.pending_mut()?.path.set(text))
    }

    pub fn set_kind(&mut self, kind: TextureKind) {
        if let Some(pending) = self.pending_mut() {
            pending.kind = kind;
        }
    }

    /// Set the texture name. Whitespace is not allowed and is dropped.
    pub fn set_name(&mut self, text: &str) -> Option<Truncation> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        Some(self.pending_mut()?.name.set(&cleaned))
    }

    /// Load the chosen file into the asset table if the last browse succeeded
    pub fn finish(&mut self, assets: &mut AssetTable, loader: &dyn TextureLoader) -> ImportOutcome {
        let Some(pending) = self.pending_mut() else {
            return ImportOutcome::NotOpen;
        };

        if pending.last_result != Some(DialogResult::Okay) {
            debug!("Finish without a chosen file, closing import panel");
            self.close();
            return ImportOutcome::Skipped;
        }

        pending.error = None;
        let path = PathBuf::from(pending.path.as_str());
        match loader.load(&path, pending.kind) {
            Ok(mut texture) => {
                if !pending.name.is_empty() {
                    Arc::make_mut(&mut texture).name = pending.name.as_str().to_owned();
                }
                let id = assets.push(texture);
                info!(path = %path.display(), id = id.id, "Imported texture");
                self.close();
                ImportOutcome::Loaded(id)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Texture import failed");
                pending.error = Some(err.to_string());
                ImportOutcome::Failed(err)
            }
        }
    }

    /// Render the import window
    pub fn show(
        &mut self,
        ctx: &Context,
        assets: &mut AssetTable,
        loader: &dyn TextureLoader,
        dialog: &mut dyn FileDialog,
    ) {
        let Some(pending) = self.pending() else {
            return;
        };

        let mut open = true;
        let mut path = pending.path.as_str().to_owned();
        let mut name = pending.name.as_str().to_owned();
        let mut kind = pending.kind;
        let error = pending.error.clone();
        let path_limit = pending.path.limit();
        let name_limit = pending.name.limit();
        let mut frame = ImportFrame::default();

        egui::Window::new("Import Texture")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Path:");
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::TextEdit::singleline(&mut path).char_limit(path_limit))
                        .changed()
                    {
                        frame.path = Some(path.clone());
                    }
                    frame.browse = ui.button("Browse").clicked();
                });

                ui.label("Name:");
                if ui
                    .add(egui::TextEdit::singleline(&mut name).char_limit(name_limit))
                    .changed()
                {
                    frame.name = Some(name.clone());
                }

                egui::ComboBox::from_label("Texture Type")
                    .selected_text(kind.label())
                    .show_ui(ui, |ui| {
                        for option in TextureKind::ALL {
                            if ui.selectable_value(&mut kind, option, option.label()).changed() {
                                frame.kind = Some(option);
                            }
                        }
                    });

                if let Some(error) = &error {
                    ui.colored_label(Color32::from_rgb(220, 90, 90), error.as_str());
                }

                frame.finish = ui.button("Finish").clicked();
            });

        frame.closed = !open;
        self.apply_frame(frame, assets, loader, dialog);
    }

    /// Apply what the operator did in one frame of the window
    fn apply_frame(
        &mut self,
        frame: ImportFrame,
        assets: &mut AssetTable,
        loader: &dyn TextureLoader,
        dialog: &mut dyn FileDialog,
    ) {
        if frame.closed {
            self.close();
            return;
        }

        if let Some(path) = frame.path {
            self.set_path(&path);
        }
        if let Some(name) = frame.name {
            self.set_name(&name);
        }
        if let Some(kind) = frame.kind {
            self.set_kind(kind);
        }

        if frame.browse {
            self.browse(dialog);
        }
        if frame.finish {
            // Failures are kept on the pending state and shown next frame.
            let _ = self.finish(assets, loader);
        }
    }
}

/// Widget interactions collected while drawing the import window
#[derive(Debug, Default)]
struct ImportFrame {
    /// Title-bar close button was pressed
    closed: bool,
    path: Option<String>,
    name: Option<String>,
    kind: Option<TextureKind>,
    browse: bool,
    finish: bool,
}
