//! Session identity.
//!
//! Authentication lives with the identity provider. Whatever it resolved
//! is passed in as a `Viewer` so the rules here never reach for ambient
//! session state.

use serde::{Deserialize, Serialize};

/// The person using the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Signed-in user, `None` for anonymous visitors.
    pub user: Option<UserInfo>,

    /// Whether the admin lookup for this user succeeded.
    pub is_admin: bool,
}

/// A signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub uid: String,
    pub username: String,
}

impl Viewer {
    /// An anonymous visitor.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in, non-admin user.
    #[must_use]
    pub fn signed_in(uid: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user: Some(UserInfo {
                uid: uid.into(),
                username: username.into(),
            }),
            is_admin: false,
        }
    }

    /// Mark this viewer as an admin. Has no effect on anonymous viewers.
    #[must_use]
    pub fn as_admin(mut self) -> Self {
        self.is_admin = self.user.is_some();
        self
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Admin rights require a signed-in user.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin && self.user.is_some()
    }
}
