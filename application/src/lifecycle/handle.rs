//! Handles for in-flight work

use tokio_util::sync::CancellationToken;

/// Identifier of one launch within a scope, unique for the scope's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkId(pub(crate) u64);

impl WorkId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "work-{}", self.0)
    }
}

/// One in-flight operation owned by a [`LifecycleScope`](super::LifecycleScope).
///
/// The handle's token is a child of the scope's current generation token, so
/// `cancel_all` on the scope cancels it. Cancelling a single handle only
/// affects that launch; its outcome is dropped even if it already finished
/// and is waiting to be collected.
#[derive(Debug, Clone)]
pub struct WorkHandle {
    id: WorkId,
    token: CancellationToken,
}

impl WorkHandle {
    pub(crate) fn new(id: WorkId, token: CancellationToken) -> Self {
        Self { id, token }
    }

    pub fn id(&self) -> WorkId {
        self.id
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_id_display() {
        assert_eq!(WorkId(7).to_string(), "work-7");
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let handle = WorkHandle::new(WorkId(1), CancellationToken::new());
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
        assert!(handle.token().is_cancelled());
    }

    #[test]
    fn test_parent_cancel_reaches_handle() {
        let parent = CancellationToken::new();
        let handle = WorkHandle::new(WorkId(1), parent.child_token());
        parent.cancel();
        assert!(handle.is_cancelled());
    }
}
