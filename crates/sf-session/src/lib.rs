use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sf_api_types::{FieldValue, null_as_default};
use std::cell::RefCell;
use std::collections::HashMap;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "currentUser";
pub const ADMIN_ROLE: &str = "admin";

/// String key/value storage holding the persisted session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Read the persisted session. Both keys must hold non-empty values for a
/// session to be present; a user record that fails to parse is an error.
pub fn load(store: &dyn SessionStore) -> Result<Option<Session>> {
    let token = store.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
    let user = store.get(USER_KEY)?.filter(|u| !u.is_empty());

    let (Some(token), Some(raw_user)) = (token, user) else {
        return Ok(None);
    };

    let user = serde_json::from_str::<SessionUser>(&raw_user)
        .with_context(|| format!("persisted {USER_KEY} is not a valid user record"))?;

    Ok(Some(Session { token, user }))
}

/// Remove both persisted keys. Removing an absent key is not an error.
pub fn clear(store: &dyn SessionStore) -> Result<()> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)?;
    Ok(())
}

/// Visibility of the auth-related header controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub login_link: bool,
    pub signup_link: bool,
    pub logout_button: bool,
    pub admin_link: bool,
}

impl Affordances {
    pub const GUEST: Affordances = Affordances {
        login_link: true,
        signup_link: true,
        logout_button: false,
        admin_link: false,
    };

    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Affordances {
                login_link: false,
                signup_link: false,
                logout_button: true,
                admin_link: session.user.is_admin(),
            },
            None => Self::GUEST,
        }
    }
}

/// Actions only available to signed-in users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Wishlist,
    Follow,
}

impl GuardedAction {
    pub fn login_prompt(self) -> &'static str {
        match self {
            GuardedAction::Wishlist => "Please login to add items to wishlist",
            GuardedAction::Follow => "Please login to follow users",
        }
    }
}

/// Returns the session if the action may proceed, or the prompt to show.
pub fn require_session(
    session: Option<&Session>,
    action: GuardedAction,
) -> Result<&Session, &'static str> {
    session.ok_or(action.login_prompt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(role: &str) -> String {
        format!(r#"{{"id": 42, "role": "{role}", "email": "kim@example.com"}}"#)
    }

    fn seeded(role: &str) -> InMemorySessionStore {
        let store = InMemorySessionStore::default();
        store.set(TOKEN_KEY, "token-abc").unwrap();
        store.set(USER_KEY, &user_json(role)).unwrap();
        store
    }

    #[test]
    fn load_returns_none_without_both_keys() -> Result<()> {
        let store = InMemorySessionStore::default();
        assert!(load(&store)?.is_none());

        store.set(TOKEN_KEY, "token-abc")?;
        assert!(load(&store)?.is_none());

        store.set(USER_KEY, "")?;
        assert!(load(&store)?.is_none());
        Ok(())
    }

    #[test]
    fn load_parses_user_and_keeps_extra_fields() -> Result<()> {
        let session = load(&seeded("customer"))?.expect("session should be present");
        assert_eq!(session.token, "token-abc");
        assert_eq!(session.user.id.to_string(), "42");
        assert_eq!(session.user.role, "customer");
        assert_eq!(
            session.user.extra.get("email").and_then(|v| v.as_str()),
            Some("kim@example.com")
        );
        Ok(())
    }

    #[test]
    fn malformed_user_record_is_an_error() {
        let store = InMemorySessionStore::default();
        store.set(TOKEN_KEY, "token-abc").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        assert!(load(&store).is_err());
    }

    #[test]
    fn null_role_still_signs_in_without_admin_link() -> Result<()> {
        let store = InMemorySessionStore::default();
        store.set(TOKEN_KEY, "token-abc")?;
        store.set(USER_KEY, r#"{"id": 5, "role": null, "name": "kim"}"#)?;

        let session = load(&store)?.expect("null role is still a signed-in user");
        assert_eq!(session.user.id, FieldValue::Int(5));
        assert_eq!(session.user.role, "");

        let shown = Affordances::for_session(Some(&session));
        assert!(shown.logout_button && !shown.admin_link);

        store.set(USER_KEY, r#"{"id": null, "role": "admin"}"#)?;
        let session = load(&store)?.expect("null id is still a signed-in user");
        assert!(session.user.is_admin());
        Ok(())
    }

    #[test]
    fn admin_link_only_for_admin_role() -> Result<()> {
        for role in ["customer", "Admin", "", "editor"] {
            let session = load(&seeded(role))?;
            let shown = Affordances::for_session(session.as_ref());
            assert!(!shown.admin_link, "role {role:?} must not see admin link");
            assert!(shown.logout_button);
            assert!(!shown.login_link && !shown.signup_link);
        }

        let session = load(&seeded("admin"))?;
        assert!(Affordances::for_session(session.as_ref()).admin_link);
        Ok(())
    }

    #[test]
    fn guest_affordances_without_session() {
        assert_eq!(Affordances::for_session(None), Affordances::GUEST);
    }

    #[test]
    fn clear_removes_both_keys_even_when_empty() -> Result<()> {
        let empty = InMemorySessionStore::default();
        clear(&empty)?;
        assert!(empty.get(TOKEN_KEY)?.is_none());

        let store = seeded("admin");
        clear(&store)?;
        assert!(store.get(TOKEN_KEY)?.is_none());
        assert!(store.get(USER_KEY)?.is_none());
        Ok(())
    }

    #[test]
    fn guarded_actions_reject_without_session() {
        assert_eq!(
            require_session(None, GuardedAction::Wishlist),
            Err("Please login to add items to wishlist")
        );
        assert_eq!(
            require_session(None, GuardedAction::Follow),
            Err("Please login to follow users")
        );
    }
}
