//! What the cookie session carries: the CSRF token, a flash message and one
//! mount id per form. Form values stay server-side in the `FormStore`.

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use rand::Rng;

use crate::errors::AppError;
use crate::forms::store::FormStore;
use crate::forms::{FormSchema, FormState};

const CSRF_KEY: &str = "csrf_token";
const FLASH_KEY: &str = "flash";

/// Cookie session middleware shared by the server and the integration tests.
pub fn middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

/// 32 random bytes, hex encoded. Used for CSRF tokens and mount ids.
fn random_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

fn insert(session: &Session, key: &str, value: &str) -> Result<(), AppError> {
    session
        .insert(key, value)
        .map_err(|e| AppError::Session(format!("Failed to store {key}: {e}")))
}

// ---------------------------------------------------------------------------
// CSRF
// ---------------------------------------------------------------------------

/// The session's CSRF token, created on first use.
pub fn csrf_token(session: &Session) -> Result<String, AppError> {
    if let Ok(Some(token)) = session.get::<String>(CSRF_KEY) {
        return Ok(token);
    }
    let token = random_token();
    insert(session, CSRF_KEY, &token)?;
    Ok(token)
}

/// Reject the request unless `submitted` matches the session token.
pub fn check_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session
        .get::<String>(CSRF_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    if stored.is_empty() || !tokens_match(&stored, submitted) {
        log::warn!("Rejected request with invalid or missing CSRF token");
        return Err(AppError::Csrf("invalid or missing CSRF token".to_string()));
    }
    Ok(())
}

/// Compares every byte so the time taken does not depend on where they differ.
fn tokens_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

// ---------------------------------------------------------------------------
// Flash
// ---------------------------------------------------------------------------

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    insert(session, FLASH_KEY, message)
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

// ---------------------------------------------------------------------------
// Form mounts
// ---------------------------------------------------------------------------

/// Mount a clean form `S`, replacing any earlier mount of it in this session.
pub fn mount_form<S: FormSchema>(
    session: &Session,
    store: &FormStore,
) -> Result<FormState<S>, AppError> {
    if let Some(old) = mount_id::<S>(session) {
        store.remove(&old);
    }
    let id = random_token();
    let state = FormState::<S>::new();
    store.save(&id, state.clone());
    insert(session, &S::PAGE.session_key(), &id)?;
    Ok(state)
}

/// State of the mounted form `S`. A session that never mounted the page, or
/// whose mount expired, gets a fresh mount.
pub fn load_form<S: FormSchema>(
    session: &Session,
    store: &FormStore,
) -> Result<FormState<S>, AppError> {
    match mount_id::<S>(session).and_then(|id| store.load::<S>(&id)) {
        Some(state) => Ok(state),
        None => mount_form::<S>(session, store),
    }
}

pub fn store_form<S: FormSchema>(
    session: &Session,
    store: &FormStore,
    state: FormState<S>,
) -> Result<(), AppError> {
    let id = match mount_id::<S>(session) {
        Some(id) => id,
        None => {
            let id = random_token();
            insert(session, &S::PAGE.session_key(), &id)?;
            id
        }
    };
    store.save(&id, state);
    Ok(())
}

/// Unmount form `S`; the next visit starts clean.
pub fn clear_form<S: FormSchema>(session: &Session, store: &FormStore) {
    if let Some(id) = mount_id::<S>(session) {
        store.remove(&id);
    }
    session.remove(&S::PAGE.session_key());
}

fn mount_id<S: FormSchema>(session: &Session) -> Option<String> {
    session.get::<String>(&S::PAGE.session_key()).unwrap_or(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars_and_random() {
        let a = random_token();
        let b = random_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn token_comparison_needs_exact_match() {
        assert!(tokens_match("abc", "abc"));
        assert!(!tokens_match("abc", "abd"));
        assert!(!tokens_match("abc", "abcd"));
        assert!(!tokens_match("abc", ""));
    }
}
