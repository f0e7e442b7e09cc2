//! Explicit session handling for the admin token.
//!
//! The bearer token lives in the browser's localStorage under a well-known
//! key, but components never touch the storage directly: they receive a
//! [`Session`] handle as a property. Tests substitute the in-memory
//! implementation and exercise the same code paths.

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the admin bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage contract for the session token. One token at a time: `set`
/// overwrites any previous login, `clear` is the logout operation.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Cheap cloneable handle around a shared [`SessionStore`].
///
/// Equality is handle identity, so passing the same session to several
/// components never triggers prop-diff re-renders on token changes.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    /// Session backed by `window.localStorage`. A missing or inaccessible
    /// storage area behaves like an empty session.
    pub fn browser() -> Self {
        Self {
            store: Rc::new(BrowserSession),
        }
    }

    /// In-memory session for tests.
    pub fn in_memory() -> Self {
        Self {
            store: Rc::new(MemorySession::default()),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.store.get()
    }

    pub fn set(&self, token: &str) {
        self.store.set(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::browser()
    }
}

struct BrowserSession;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            storage.set_item(TOKEN_KEY, token).ok();
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            storage.remove_item(TOKEN_KEY).ok();
        }
    }
}

#[derive(Default)]
struct MemorySession {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_starts_empty() {
        assert_eq!(Session::in_memory().get(), None);
    }

    #[test]
    fn set_then_get_returns_token() {
        let session = Session::in_memory();
        session.set("abc123");
        assert_eq!(session.get().as_deref(), Some("abc123"));
    }

    #[test]
    fn set_overwrites_previous_login() {
        let session = Session::in_memory();
        session.set("first");
        session.set("second");
        assert_eq!(session.get().as_deref(), Some("second"));
    }

    #[test]
    fn clear_logs_out() {
        let session = Session::in_memory();
        session.set("abc123");
        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn clones_share_the_same_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set("abc123");
        assert_eq!(other.get().as_deref(), Some("abc123"));
        assert!(session == other);
        assert!(session != Session::in_memory());
    }
}
