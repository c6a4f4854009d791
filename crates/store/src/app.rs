//! Application composition: one typed store per collection.

use std::sync::Arc;

use lorekeeper_domain::{
    AppSettings, Campaign, Character, Condition, Item, RuleCategory, RuleReference, Spell, User,
};

use crate::auth::AuthSession;
use crate::config::StoreConfig;
use crate::infrastructure::ports::{DocumentBackend, StoreError};
use crate::stores::{CascadingStore, CollectionStore, SingletonStore};

const SETTINGS_COLLECTION: &str = "settings";
const SETTINGS_DOCUMENT_ID: &str = "global-settings";

/// All typed stores, wired over one shared backend handle.
///
/// Construction is explicit dependency injection: the backend and the
/// configuration come in from the caller, nothing is global. The `users`
/// store is the only one written through `set`, because user records are
/// keyed by the external auth identity rather than a store-assigned ID.
#[derive(Clone)]
pub struct Stores {
    pub users: CollectionStore<User>,
    pub campaigns: CollectionStore<Campaign>,
    pub characters: CollectionStore<Character>,
    pub items: CollectionStore<Item>,
    pub spells: CollectionStore<Spell>,
    pub conditions: CollectionStore<Condition>,
    pub rules: CascadingStore<RuleCategory, RuleReference>,
    pub settings: SingletonStore<AppSettings>,
}

impl Stores {
    pub fn new(backend: Arc<dyn DocumentBackend>, config: StoreConfig) -> Self {
        let rule_categories = CollectionStore::new(Arc::clone(&backend), config.clone());
        let rule_references = CollectionStore::new(Arc::clone(&backend), config.clone());
        Self {
            users: CollectionStore::new(Arc::clone(&backend), config.clone()),
            campaigns: CollectionStore::new(Arc::clone(&backend), config.clone()),
            characters: CollectionStore::new(Arc::clone(&backend), config.clone()),
            items: CollectionStore::new(Arc::clone(&backend), config.clone()),
            spells: CollectionStore::new(Arc::clone(&backend), config.clone()),
            conditions: CollectionStore::new(Arc::clone(&backend), config.clone()),
            rules: CascadingStore::new(rule_categories, rule_references),
            settings: SingletonStore::new(
                backend,
                config,
                SETTINGS_COLLECTION,
                SETTINGS_DOCUMENT_ID,
            ),
        }
    }

    /// The user record for the current session, if any. An authenticated
    /// session whose record has not been created yet resolves to `None`.
    pub async fn current_user(&self, session: &AuthSession) -> Result<Option<User>, StoreError> {
        match session.current_user_id() {
            Some(user_id) => self.users.get(user_id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use lorekeeper_domain::{UserDraft, UserId};

    use super::*;
    use crate::infrastructure::memory::MemoryBackend;

    fn stores() -> Stores {
        Stores::new(Arc::new(MemoryBackend::new()), StoreConfig::default())
    }

    #[tokio::test]
    async fn anonymous_sessions_have_no_current_user() {
        let stores = stores();
        let user = stores
            .current_user(&AuthSession::anonymous())
            .await
            .expect("current_user");
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn an_authenticated_session_resolves_its_user_record() {
        let stores = stores();
        let id = UserId::new("auth0|gm");
        let session = AuthSession::authenticated(id.clone());

        // Authenticated but not yet registered: no record, no error.
        assert!(stores
            .current_user(&session)
            .await
            .expect("current_user")
            .is_none());

        stores
            .users
            .set(&id, UserDraft::new("The GM"))
            .await
            .expect("set");
        let user = stores
            .current_user(&session)
            .await
            .expect("current_user")
            .expect("registered");
        assert_eq!(user.display_name, "The GM");
    }

    #[tokio::test]
    async fn settings_live_at_the_fixed_document() {
        let stores = stores();
        assert!(stores.settings.get().await.expect("get").is_none());
        stores
            .settings
            .save(&AppSettings::default())
            .await
            .expect("save");
        assert!(stores.settings.get().await.expect("get").is_some());
    }
}
