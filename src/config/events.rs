//! Event stream configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Event broadcast configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Frames buffered per WebSocket client before it starts skipping
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl EventsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_capacity == 0 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    256
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_valid() {
        assert!(EventsConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = EventsConfig { channel_capacity: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidChannelCapacity));
    }
}
