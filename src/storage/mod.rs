use crate::domain::DisplaySettings;
use crate::error::Result;
use async_trait::async_trait;

pub mod file_store;

/// Storage trait for persisting display settings across sessions
///
/// The grouping/sorting engine never touches this; the surrounding shell
/// loads once at startup and saves on every preference change.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Loads the persisted settings, substituting the default when nothing
    /// valid has been stored
    async fn load(&self) -> DisplaySettings;

    /// Persists the settings, overwriting any prior value
    async fn save(&self, settings: &DisplaySettings) -> Result<()>;
}
