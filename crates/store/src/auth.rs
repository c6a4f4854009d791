//! Session identity consumed from the authentication boundary.

use lorekeeper_domain::UserId;

/// The authenticated identity for the current session, as handed over by
/// the auth layer. This crate never authenticates; it only keys user
/// records by the identity it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    current_user_id: Option<UserId>,
}

impl AuthSession {
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            current_user_id: Some(user_id),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            current_user_id: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user_id.is_some()
    }

    pub fn current_user_id(&self) -> Option<&UserId> {
        self.current_user_id.as_ref()
    }
}
