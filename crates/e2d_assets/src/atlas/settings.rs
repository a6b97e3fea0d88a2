use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Clone, SmartDefault, Deserialize)]
#[serde(default)]
pub struct AtlasSettings {
    /// How many atlases to reserve space for up front.
    #[default(32)]
    pub capacity: usize,
}

impl AtlasSettings {
    pub fn decode(yaml: &str) -> Result<AtlasSettings> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
