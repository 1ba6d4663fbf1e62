//! The signed-in identity.
//!
//! The session is the user record and bearer token persisted under the `user` and
//! `token` storage keys. Both are written on login and cleared together on logout;
//! a half-present pair is treated as signed out. No expiry or refresh is tracked here,
//! an expired token only shows up as a 401 from the API.

use dioxus_logger::tracing;

use crate::{
    client::{error::StorageError, store::storage::SessionStorage},
    model::user::UserDto,
};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user: Option<UserDto>,
    token: Option<String>,
}

impl SessionState {
    /// Reads the persisted session, signed out unless both halves are present and valid
    pub fn restore(storage: &dyn SessionStorage) -> Self {
        let (Some(user), Some(token)) = (storage.get(USER_KEY), storage.get(TOKEN_KEY)) else {
            return Self::default();
        };

        match serde_json::from_str::<UserDto>(&user) {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Restored session");
                Self {
                    user: Some(user),
                    token: Some(token),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable persisted session user");
                Self::default()
            }
        }
    }

    pub fn login(
        &mut self,
        storage: &dyn SessionStorage,
        user: UserDto,
        token: String,
    ) -> Result<(), StorageError> {
        storage.set(USER_KEY, &serde_json::to_string(&user)?)?;
        storage.set(TOKEN_KEY, &token)?;

        tracing::info!(user_id = %user.id, "Signed in");

        self.user = Some(user);
        self.token = Some(token);

        Ok(())
    }

    /// Clears the session in memory even when storage refuses the removal
    pub fn logout(&mut self, storage: &dyn SessionStorage) -> Result<(), StorageError> {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        self.token = None;

        let user_removed = storage.remove(USER_KEY);
        storage.remove(TOKEN_KEY)?;
        user_removed
    }

    pub fn user(&self) -> Option<&UserDto> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;

    use super::{SessionState, TOKEN_KEY, USER_KEY};
    use crate::{
        client::store::storage::{MemoryStorage, SessionStorage},
        model::{id::Id, user::UserDto},
    };

    fn user(id: &str, user_type: &str) -> Result<UserDto, TestError> {
        Ok(serde_json::from_value(factory::user(id, user_type))?)
    }

    #[test]
    /// Tests logging in and then out.
    ///
    /// Verifies login persists the user and token and logout clears both.
    ///
    /// Expected: empty storage after logout
    fn login_then_logout_empties_storage() -> Result<(), TestError> {
        let storage = MemoryStorage::new();
        let mut session = SessionState::default();

        session.login(&storage, user("7", "student")?, "t1".to_string())?;
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert!(storage.get(USER_KEY).is_some());

        session.logout(&storage)?;
        assert!(storage.get(USER_KEY).is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.is_empty());
        assert_eq!(session, SessionState::default());

        Ok(())
    }

    #[test]
    /// Tests restoring a persisted session.
    ///
    /// Verifies the stored user and token come back on load.
    ///
    /// Expected: user 7 with token t1
    fn restores_persisted_session() -> Result<(), TestError> {
        let storage = MemoryStorage::new();
        SessionState::default().login(&storage, user("7", "company")?, "t1".to_string())?;

        let restored = SessionState::restore(&storage);

        assert_eq!(restored.user().map(|user| &user.id), Some(&Id::from(7)));
        assert_eq!(restored.token(), Some("t1"));

        Ok(())
    }

    #[test]
    /// Tests restoring half a session.
    ///
    /// Verifies a token without a user, or a user without a token, reads as signed out.
    ///
    /// Expected: no user in either case
    fn partial_session_is_signed_out() -> Result<(), TestError> {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "t1")?;
        assert!(SessionState::restore(&storage).user().is_none());

        let storage = MemoryStorage::new();
        storage.set(USER_KEY, &factory::user("7", "student").to_string())?;
        assert!(SessionState::restore(&storage).user().is_none());

        Ok(())
    }

    #[test]
    /// Tests restoring a session whose stored user is not JSON.
    ///
    /// Verifies the corrupt entry signs the visitor out.
    ///
    /// Expected: no user and no token
    fn unreadable_user_is_signed_out() -> Result<(), TestError> {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "not json")?;
        storage.set(TOKEN_KEY, "t1")?;

        let restored = SessionState::restore(&storage);

        assert_eq!(restored.user(), None);
        assert_eq!(restored.token(), None);

        Ok(())
    }
}
