//! In-process gate that ties each business identity to the pod version allowed to operate
//! on it, so commands from a superseded deployment are turned away.
//!
//! ```
//! use pod_coordinator::PodCoordinator;
//!
//! let coordinator = PodCoordinator::new();
//! coordinator.save("svc:1.0", "pod-a");
//! assert!(coordinator.can_access("svc:1.0", Some("pod-a")));
//! assert!(!coordinator.can_access("svc:1.0", Some("pod-b")));
//! ```

pub mod coordinator;
pub mod error;
pub mod interface;

pub use coordinator::{CoordinatorConfig, PodCoordinator, PodVersion};
pub use error::{CoordinatorError, Result};
pub use interface::gate::AccessGate;
