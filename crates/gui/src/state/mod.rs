pub mod garden;
pub mod history;
pub mod selection;
pub mod settings;

use chrono::{DateTime, Utc};
use shared::Garden;

pub use garden::{GardenEvent, GardenState};
pub use history::{HistoryManager, HISTORY_LIMIT};
use selection::SelectionState;
pub use settings::{EditorSettings, Language};

pub use crate::viewport::ViewMode;

/// Category shown when the editor starts
pub const DEFAULT_CATEGORY: &str = "garden-plan";

/// Panel visibility flags
pub struct PanelVisibility {
    pub catalog: bool,
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            catalog: true,
            properties: true,
        }
    }
}

/// Metadata of the garden the editor is working on
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentGarden {
    pub id: String,
    pub name: String,
    pub description: String,
    pub last_modified: DateTime<Utc>,
}

impl From<&Garden> for CurrentGarden {
    fn from(garden: &Garden) -> Self {
        Self {
            id: garden.id.clone(),
            name: garden.name.clone(),
            description: garden.description.clone(),
            last_modified: garden.last_modified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown to the user in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Destructive action waiting for confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Drop the current layout and start empty
    NewGarden,
    /// Delete a saved garden
    DeleteGarden { id: String, name: String },
}

/// "Save as" dialog fields
#[derive(Debug, Default)]
pub struct SaveDialog {
    pub open: bool,
    pub name: String,
    pub description: String,
}

/// Combined editor state
pub struct EditorState {
    pub garden: GardenState,
    pub selection: SelectionState,
    pub settings: EditorSettings,
    pub view_mode: ViewMode,
    pub current_garden: Option<CurrentGarden>,
    /// Active catalog tab
    pub category: String,
    /// Catalog search term (empty = show category)
    pub search: String,
    pub panels: PanelVisibility,
    pub pending_confirm: Option<ConfirmAction>,
    pub save_dialog: SaveDialog,
    /// Share link shown in the share dialog
    pub share_link: Option<String>,
    pub notice: Option<Notice>,
}

impl EditorState {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            garden: GardenState::default(),
            selection: SelectionState::default(),
            settings,
            view_mode: ViewMode::default(),
            current_garden: None,
            category: DEFAULT_CATEGORY.to_string(),
            search: String::new(),
            panels: PanelVisibility::default(),
            pending_confirm: None,
            save_dialog: SaveDialog::default(),
            share_link: None,
            notice: None,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        });
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            message,
        });
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
