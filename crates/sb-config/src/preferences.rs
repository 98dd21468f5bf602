//! Local preference storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Explicit preference file. Empty means the user config directory.
    #[serde(default)]
    pub path: String,
}

impl PreferencesConfig {
    /// Where preferences are read from and written to.
    ///
    /// Returns `None` only when no path is configured and the platform has no
    /// user config directory.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.path.is_empty() {
            return Some(PathBuf::from(&self.path));
        }
        dirs::config_dir().map(|dir| dir.join("studyboard").join(PREFERENCES_FILE_NAME))
    }
}
