use alloc::{collections::BTreeMap, vec::Vec};

use crate::{provider::Provider, token::InjectToken};

/// Token-keyed provider descriptors. Re-registration overwrites: the last
/// write wins.
#[derive(Clone, Default)]
pub(crate) struct ProviderRegistry {
    providers: BTreeMap<InjectToken, Provider>,
}

impl ProviderRegistry {
    #[inline]
    pub(crate) fn insert(&mut self, token: InjectToken, provider: Provider) -> Option<Provider> {
        self.providers.insert(token, provider)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, token: &InjectToken) -> Option<Provider> {
        self.providers.get(token).cloned()
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, token: &InjectToken) -> bool {
        self.providers.contains_key(token)
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.providers.clear();
    }

    #[must_use]
    pub(crate) fn tokens(&self) -> Vec<InjectToken> {
        self.providers.keys().cloned().collect()
    }
}

/// Secondary index from a provider class's own identity to the token it
/// was registered under, so a look-up by either succeeds.
#[derive(Clone, Default)]
pub(crate) struct AliasMap {
    aliases: BTreeMap<InjectToken, InjectToken>,
}

impl AliasMap {
    #[inline]
    pub(crate) fn insert(&mut self, alias: InjectToken, canonical: InjectToken) {
        self.aliases.insert(alias, canonical);
    }

    /// Resolves `token` to its canonical registration token, or returns it
    /// unchanged when no alias is recorded.
    #[must_use]
    pub(crate) fn resolve(&self, token: InjectToken) -> InjectToken {
        match self.aliases.get(&token) {
            Some(canonical) => canonical.clone(),
            None => token,
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.aliases.clear();
    }
}
