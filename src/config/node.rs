//! Local node configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::identity::MAX_AUTHOR_NAME_LENGTH;

/// Identity and startup data of the local node
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    /// Display name of the local identity
    #[serde(default = "default_local_author_name")]
    pub local_author_name: String,

    /// Populate the stores with a few contacts and messages at startup
    #[serde(default)]
    pub seed_demo_contacts: bool,
}

impl NodeConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let len = self.local_author_name.len();
        if len == 0 || len > MAX_AUTHOR_NAME_LENGTH {
            return Err(ValidationError::InvalidAuthorName);
        }
        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            local_author_name: default_local_author_name(),
            seed_demo_contacts: false,
        }
    }
}

fn default_local_author_name() -> String {
    "courier".to_string()
}
