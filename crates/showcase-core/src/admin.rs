//! Admin gate for the upload route.
//!
//! This is a UI gate, not a security control: the key is a literal compiled
//! into the client, and the flag lives in the session store where anything
//! with access to the process can set it.

use std::sync::Arc;

use crate::notice::Notice;
use crate::storage::KeyValueStore;

/// Session store key of the admin flag
pub const ADMIN_SESSION_KEY: &str = "adminAuthenticated";

/// Placeholder key accepted by the gate
pub const ADMIN_KEY: &str = "magic123";

/// Result of submitting a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutcome {
    /// Flag set; navigate to the upload page
    Granted(Notice),
    /// Flag untouched; gate stays open
    Rejected(Notice),
}

impl AdminOutcome {
    pub fn notice(&self) -> &Notice {
        match self {
            AdminOutcome::Granted(n) | AdminOutcome::Rejected(n) => n,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AdminOutcome::Granted(_))
    }
}

/// Tab-lifetime admin session backed by a session store
#[derive(Clone)]
pub struct AdminGate {
    session: Arc<dyn KeyValueStore>,
}

impl AdminGate {
    pub fn new(session: Arc<dyn KeyValueStore>) -> Self {
        Self { session }
    }

    /// True only when the flag holds exactly `"true"`
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session.get(ADMIN_SESSION_KEY), Ok(Some(v)) if v == "true")
    }

    /// Compare `input` with the placeholder key
    pub fn submit(&self, input: &str) -> AdminOutcome {
        if input != ADMIN_KEY {
            tracing::info!("Admin key rejected");
            return AdminOutcome::Rejected(Notice::error("Invalid admin key!"));
        }

        if let Err(e) = self.session.set(ADMIN_SESSION_KEY, "true") {
            tracing::warn!("Failed to record admin session: {}", e);
        }
        tracing::info!("Admin access granted");
        AdminOutcome::Granted(Notice::info("Admin access granted!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::storage::MemoryStore;

    fn gate() -> (AdminGate, Arc<MemoryStore>) {
        let session = Arc::new(MemoryStore::new());
        (AdminGate::new(session.clone()), session)
    }

    #[test]
    fn test_correct_key_grants() {
        let (gate, session) = gate();
        assert!(!gate.is_authenticated());

        let outcome = gate.submit("magic123");
        assert!(outcome.is_granted());
        assert_eq!(outcome.notice().message, "Admin access granted!");
        assert!(gate.is_authenticated());
        assert_eq!(session.get(ADMIN_SESSION_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_wrong_key_rejects() {
        let (gate, session) = gate();

        let outcome = gate.submit("wrong");
        assert!(!outcome.is_granted());
        assert_eq!(outcome.notice().message, "Invalid admin key!");
        assert_eq!(outcome.notice().level, NoticeLevel::Error);
        assert!(!gate.is_authenticated());
        assert!(session.get(ADMIN_SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_key_comparison_is_exact() {
        let (gate, _session) = gate();
        assert!(!gate.submit(" magic123").is_granted());
        assert!(!gate.submit("MAGIC123").is_granted());
        assert!(!gate.submit("").is_granted());
    }

    #[test]
    fn test_flag_other_than_true_is_unauthenticated() {
        let (gate, session) = gate();
        session.set(ADMIN_SESSION_KEY, "yes").unwrap();
        assert!(!gate.is_authenticated());
    }
}
