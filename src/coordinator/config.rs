//! Construction-time tuning for [`PodCoordinator`](super::PodCoordinator).

use crate::error::{CoordinatorError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Number of identities to reserve room for up front.
    pub initial_capacity: usize,
    /// Number of lock shards. `None` lets dashmap size it from the CPU count.
    pub shard_amount: Option<usize>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shard_amount: None,
        }
    }
}

impl CoordinatorConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(shards) = self.shard_amount {
            // dashmap panics on anything else
            if shards <= 1 || !shards.is_power_of_two() {
                return Err(CoordinatorError::InvalidConfig(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CoordinatorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_shard_amounts() {
        for shards in [0, 1, 3, 12] {
            let config = CoordinatorConfig {
                shard_amount: Some(shards),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(CoordinatorError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn accepts_power_of_two_shards() {
        let config = CoordinatorConfig {
            initial_capacity: 64,
            shard_amount: Some(16),
        };
        assert!(config.validate().is_ok());
    }
}
