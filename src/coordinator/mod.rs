use dashmap::DashMap;
use tracing::{debug, trace};

use crate::error::{CoordinatorError, Result};

pub mod config;
mod version;

pub use config::CoordinatorConfig;
pub use version::PodVersion;

/// Tracks which pod version currently owns each business identity.
///
/// Commands tagged with a pod version are only let through while that version is the one
/// recorded for the identity, so a pod that has been replaced by a newer deployment can't
/// keep operating on the module. Entries live in memory only and never expire.
pub struct PodCoordinator {
    owners: DashMap<String, PodVersion>,
}

impl PodCoordinator {
    pub fn new() -> Self {
        Self {
            owners: DashMap::new(),
        }
    }

    pub fn with_config(config: CoordinatorConfig) -> Result<Self> {
        config.validate()?;
        let owners = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };
        Ok(Self { owners })
    }

    /// Records `version` as the owner of `identity`, replacing whatever was there.
    pub fn save(&self, identity: &str, version: impl Into<PodVersion>) {
        let version = version.into();
        debug!(identity, version = %version, "Saving pod version");
        self.owners.insert(identity.to_owned(), version);
    }

    /// Drops the entry for `identity` if, and only if, it still belongs to `version`.
    ///
    /// Returns whether an entry was removed. A missing or mismatched entry is left alone.
    pub fn remove(&self, identity: &str, version: impl Into<PodVersion>) -> bool {
        let version = version.into();
        let removed = self
            .owners
            .remove_if(identity, |_, stored| *stored == version)
            .is_some();
        debug!(identity, version = %version, removed, "Removing pod version");
        removed
    }

    pub fn can_access(&self, identity: &str, version: Option<&str>) -> bool {
        let stored = match self.owners.get(identity) {
            Some(stored) => stored,
            None => {
                trace!(identity, "No pod version recorded, allowing");
                return true;
            }
        };

        if stored.permits(version) {
            trace!(identity, "Pod version check passed");
            true
        } else {
            debug!(
                identity,
                requested = version.unwrap_or_default(),
                current = %stored.value(),
                "Rejecting command from superseded pod"
            );
            false
        }
    }

    /// Same check as [`can_access`](Self::can_access), reported as an error on denial.
    pub fn ensure_access(&self, identity: &str, version: Option<&str>) -> Result<()> {
        match self.owners.get(identity) {
            Some(stored) if !stored.permits(version) => Err(CoordinatorError::Superseded {
                identity: identity.to_owned(),
                requested: version.unwrap_or_default().to_owned(),
                current: stored.value().clone(),
            }),
            _ => Ok(()),
        }
    }

    pub fn current(&self, identity: &str) -> Option<PodVersion> {
        self.owners.get(identity).map(|stored| stored.value().clone())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn clear(&self) {
        debug!(entries = self.owners.len(), "Clearing pod coordinator");
        self.owners.clear();
    }
}

impl Default for PodCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
