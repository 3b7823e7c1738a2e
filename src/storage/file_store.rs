use crate::{domain::DisplaySettings, error::Result, storage::SettingsStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed settings store: one JSON blob under a fixed path
pub struct FileSettingsStore {
    root_path: PathBuf,
}

impl FileSettingsStore {
    const QUICKBOARD_DIR: &'static str = ".quickboard";
    const SETTINGS_FILE: &'static str = "display_settings.json";

    /// Creates a new FileSettingsStore rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::QUICKBOARD_DIR),
        }
    }

    fn settings_file(&self) -> PathBuf {
        self.root_path.join(Self::SETTINGS_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> DisplaySettings {
        // A missing or unreadable blob is the same as never having saved.
        match fs::read_to_string(self.settings_file()).await {
            Ok(contents) => DisplaySettings::from_json_or_default(&contents),
            Err(_) => DisplaySettings::default(),
        }
    }

    async fn save(&self, settings: &DisplaySettings) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_file(), json).await?;
        Ok(())
    }
}
