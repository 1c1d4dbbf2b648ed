use std::fmt;

/// The pod version that currently owns a business identity.
///
/// An empty or missing token always collapses into [`PodVersion::Unrestricted`], so there
/// is exactly one way to say "no pod is pinned".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PodVersion {
    Unrestricted,
    Pinned(String),
}

impl PodVersion {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PodVersion::Unrestricted => None,
            PodVersion::Pinned(version) => Some(version.as_str()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, PodVersion::Unrestricted)
    }

    /// Whether a command carrying `requested` may act while `self` is the stored version.
    pub(crate) fn permits(&self, requested: Option<&str>) -> bool {
        match (self, normalize(requested)) {
            (_, None) | (PodVersion::Unrestricted, _) => true,
            (PodVersion::Pinned(stored), Some(requested)) => stored == requested,
        }
    }
}

pub(crate) fn normalize(version: Option<&str>) -> Option<&str> {
    version.filter(|v| !v.is_empty())
}

impl Default for PodVersion {
    fn default() -> Self {
        PodVersion::Unrestricted
    }
}

impl From<&str> for PodVersion {
    fn from(version: &str) -> Self {
        Some(version).into()
    }
}

impl From<String> for PodVersion {
    fn from(version: String) -> Self {
        Some(version).into()
    }
}

impl From<Option<&str>> for PodVersion {
    fn from(version: Option<&str>) -> Self {
        match normalize(version) {
            Some(version) => PodVersion::Pinned(version.to_owned()),
            None => PodVersion::Unrestricted,
        }
    }
}

impl From<Option<String>> for PodVersion {
    fn from(version: Option<String>) -> Self {
        match version {
            Some(version) if !version.is_empty() => PodVersion::Pinned(version),
            _ => PodVersion::Unrestricted,
        }
    }
}

impl fmt::Display for PodVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_collapse_to_unrestricted() {
        assert_eq!(PodVersion::from(""), PodVersion::Unrestricted);
        assert_eq!(PodVersion::from(None::<&str>), PodVersion::Unrestricted);
        assert_eq!(PodVersion::from(Some(String::new())), PodVersion::Unrestricted);
        assert_eq!(PodVersion::from(None::<String>), PodVersion::Unrestricted);
    }

    #[test]
    fn non_empty_tokens_are_pinned() {
        let version = PodVersion::from("default/biz1-web-single-host-786dfc476f-rt28q");
        assert_eq!(
            version.as_str(),
            Some("default/biz1-web-single-host-786dfc476f-rt28q")
        );
        assert!(!version.is_unrestricted());
        assert_eq!(version.to_string(), "default/biz1-web-single-host-786dfc476f-rt28q");
    }

    #[test]
    fn unrestricted_displays_as_empty() {
        assert_eq!(PodVersion::Unrestricted.to_string(), "");
        assert_eq!(PodVersion::default().as_str(), None);
    }

    #[test]
    fn permits_follows_the_gate_rules() {
        let pinned = PodVersion::from("pod-a");
        assert!(pinned.permits(Some("pod-a")));
        assert!(!pinned.permits(Some("pod-b")));
        assert!(pinned.permits(Some("")));
        assert!(pinned.permits(None));

        assert!(PodVersion::Unrestricted.permits(Some("pod-b")));
        assert!(PodVersion::Unrestricted.permits(None));
    }
}
