pub mod javascript;

use crate::{error::Result, types::DetectedPlatforms};
use std::path::Path;

impl DetectedPlatforms {
    /// Serialize the platform list to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the platform list as a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
