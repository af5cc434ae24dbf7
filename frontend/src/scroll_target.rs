//! Cross-page scroll requests.
//!
//! A nav click on another page stores the section to scroll to and then
//! routes home; the home page takes the request once when it mounts.
//! Nothing goes into the URL, so no stale `#fragment` is left behind.

use std::cell::Cell;

/// Holds at most one pending section selector. A new request replaces an
/// unconsumed one, and reading it empties the store.
#[derive(Default)]
pub struct ScrollTargetStore {
    pending: Cell<Option<String>>,
}

impl ScrollTargetStore {
    pub fn set(&self, target: impl Into<String>) {
        self.pending.set(Some(target.into()));
    }

    pub fn take(&self) -> Option<String> {
        self.pending.take()
    }
}

thread_local! {
    static PENDING_SCROLL_TARGET: ScrollTargetStore = ScrollTargetStore::default();
}

pub fn set_pending_scroll_target(target: &str) {
    PENDING_SCROLL_TARGET.with(|store| store.set(target));
}

pub fn consume_pending_scroll_target() -> Option<String> {
    PENDING_SCROLL_TARGET.with(ScrollTargetStore::take)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_nothing() {
        let store = ScrollTargetStore::default();
        assert_eq!(store.take(), None);
        assert_eq!(store.take(), None);
    }

    #[test]
    fn target_is_consumed_once() {
        let store = ScrollTargetStore::default();
        store.set("#services");
        assert_eq!(store.take().as_deref(), Some("#services"));
        assert_eq!(store.take(), None);
    }

    #[test]
    fn last_write_wins() {
        let store = ScrollTargetStore::default();
        store.set("#a");
        store.set("#b");
        assert_eq!(store.take().as_deref(), Some("#b"));
        assert_eq!(store.take(), None);
    }

    #[test]
    fn shared_store_round_trip() {
        // Tests that touch the shared store always leave it empty.
        assert_eq!(consume_pending_scroll_target(), None);
        set_pending_scroll_target("#team");
        set_pending_scroll_target("#results");
        assert_eq!(consume_pending_scroll_target().as_deref(), Some("#results"));
        assert_eq!(consume_pending_scroll_target(), None);
    }
}
