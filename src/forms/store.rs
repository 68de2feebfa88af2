//! Server-side home of mounted forms.
//!
//! The cookie session only carries a mount id per form; the values and error
//! flags live here, so a long field value never reaches the size-limited
//! session cookie.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::{FormSchema, FormState};

const MAX_MOUNTS: usize = 10_000;
const IDLE_SECS: u64 = 1800; // 30 minutes

struct Mount {
    state: Box<dyn Any + Send>,
    touched: Instant,
}

#[derive(Clone)]
pub struct FormStore {
    mounts: Arc<Mutex<HashMap<String, Mount>>>,
    capacity: usize,
    idle: Duration,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::with_limits(MAX_MOUNTS, Duration::from_secs(IDLE_SECS))
    }

    pub fn with_limits(capacity: usize, idle: Duration) -> Self {
        Self {
            mounts: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
            idle,
        }
    }

    /// State of form `S` mounted under `id`. Unknown or expired ids, and ids
    /// mounted for a different form, yield `None`.
    pub fn load<S: FormSchema>(&self, id: &str) -> Option<FormState<S>> {
        let mut map = self.mounts.lock().unwrap_or_else(|e| e.into_inner());
        let mount = map.get_mut(id)?;
        if mount.touched.elapsed() > self.idle {
            map.remove(id);
            return None;
        }
        mount.touched = Instant::now();
        mount.state.downcast_ref::<FormState<S>>().cloned()
    }

    pub fn save<S: FormSchema>(&self, id: &str, state: FormState<S>) {
        let mut map = self.mounts.lock().unwrap_or_else(|e| e.into_inner());

        if !map.contains_key(id) && map.len() >= self.capacity {
            let idle = self.idle;
            map.retain(|_, m| m.touched.elapsed() <= idle);
            if map.len() >= self.capacity {
                // Still full: drop the least recently used mount.
                if let Some(oldest) = map
                    .iter()
                    .min_by_key(|(_, m)| m.touched)
                    .map(|(k, _)| k.clone())
                {
                    map.remove(&oldest);
                }
            }
        }

        map.insert(
            id.to_string(),
            Mount {
                state: Box::new(state),
                touched: Instant::now(),
            },
        );
    }

    pub fn remove(&self, id: &str) {
        let mut map = self.mounts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(id);
    }

    pub fn len(&self) -> usize {
        self.mounts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::login::LoginField;
    use crate::forms::{LoginForm, UserSignupForm};

    #[test]
    fn saved_state_loads_back() {
        let store = FormStore::new();
        let mut state = FormState::<LoginForm>::new();
        state.on_field_change(LoginField::Email, "x".repeat(5000));
        store.save("m1", state);

        let back = store.load::<LoginForm>("m1").expect("mounted");
        assert_eq!(back.value(LoginField::Email).len(), 5000);
    }

    #[test]
    fn other_form_type_does_not_load() {
        let store = FormStore::new();
        store.save("m1", FormState::<LoginForm>::new());

        assert!(store.load::<UserSignupForm>("m1").is_none());
        assert!(store.load::<LoginForm>("missing").is_none());
    }

    #[test]
    fn full_store_evicts_least_recently_used() {
        let store = FormStore::with_limits(2, Duration::from_secs(60));
        store.save("a", FormState::<LoginForm>::new());
        std::thread::sleep(Duration::from_millis(5));
        store.save("b", FormState::<LoginForm>::new());
        std::thread::sleep(Duration::from_millis(5));
        store.save("c", FormState::<LoginForm>::new());

        assert_eq!(store.len(), 2);
        assert!(store.load::<LoginForm>("a").is_none());
        assert!(store.load::<LoginForm>("c").is_some());
    }

    #[test]
    fn idle_mounts_expire() {
        let store = FormStore::with_limits(10, Duration::from_millis(1));
        store.save("a", FormState::<LoginForm>::new());
        std::thread::sleep(Duration::from_millis(10));

        assert!(store.load::<LoginForm>("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn removed_mount_is_gone() {
        let store = FormStore::new();
        store.save("a", FormState::<LoginForm>::new());
        store.remove("a");
        assert!(store.load::<LoginForm>("a").is_none());
    }
}
