use crate::coordinator::{PodCoordinator, PodVersion};

/// What a command dispatcher needs from the coordinator before it acts on a business module.
pub trait AccessGate: Send + Sync {
    fn save(&self, identity: &str, version: Option<&str>);
    fn remove(&self, identity: &str, version: Option<&str>) -> bool;
    fn can_access(&self, identity: &str, version: Option<&str>) -> bool;
}

impl AccessGate for PodCoordinator {
    fn save(&self, identity: &str, version: Option<&str>) {
        PodCoordinator::save(self, identity, PodVersion::from(version));
    }

    fn remove(&self, identity: &str, version: Option<&str>) -> bool {
        PodCoordinator::remove(self, identity, PodVersion::from(version))
    }

    fn can_access(&self, identity: &str, version: Option<&str>) -> bool {
        PodCoordinator::can_access(self, identity, version)
    }
}
