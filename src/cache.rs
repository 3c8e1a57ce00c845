use alloc::collections::BTreeMap;

use crate::{token::InjectToken, utils::thread_safety::RcAnyThreadSafety};

/// Per-container memoized instances, keyed by canonical token.
#[derive(Clone, Default)]
pub(crate) struct SingletonCache {
    map: BTreeMap<InjectToken, RcAnyThreadSafety>,
}

impl SingletonCache {
    #[inline]
    #[must_use]
    pub(crate) fn get(&self, token: &InjectToken) -> Option<RcAnyThreadSafety> {
        self.map.get(token).cloned()
    }

    #[inline]
    pub(crate) fn insert(&mut self, token: InjectToken, instance: RcAnyThreadSafety) {
        self.map.insert(token, instance);
    }

    /// Drops the cached instance for `token`. Called on re-registration so
    /// a later `get` reads the new provider instead of a stale singleton.
    #[inline]
    pub(crate) fn remove(&mut self, token: &InjectToken) {
        self.map.remove(token);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    /// A copy for a child container: instances are shared, the map is not.
    #[inline]
    #[must_use]
    pub(crate) fn snapshot(&self) -> Self {
        self.clone()
    }
}
