//! Scoped save/restore of the routing state
//!
//! The scoped-acquisition bracket: capture the current routing state,
//! install a temporary override, and guarantee restoration on every exit
//! path, including an unwinding body.

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use super::state::{self, SocksProxyState};

/// Serializes concurrent scope brackets over the shared routing state.
/// Held for the full duration of [`run_scoped`].
static SCOPE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// RAII guard over the process-wide routing state.
///
/// Entering a scope saves the current [`SocksProxyState`] and installs the
/// supplied proxy target with routing enabled; dropping the guard restores
/// the saved state. Guards on one call stack restore in strict LIFO order.
///
/// `enter` does not serialize against other threads: overlapping scopes
/// from concurrent threads clobber each other's saved state. Use
/// [`run_scoped`], which holds a process-wide lock for the whole bracket,
/// anywhere concurrent use is possible.
#[derive(Debug)]
pub struct ProxyScope {
    saved: Option<SocksProxyState>,
}

impl ProxyScope {
    /// Saves the current routing state and routes all outbound
    /// connections through `host:port` until the guard is dropped.
    #[must_use = "dropping the scope immediately restores the previous routing state"]
    pub fn enter(host: &str, port: u16) -> Self {
        let saved = state::replace(SocksProxyState::through(host, port));
        tracing::debug!(host, port, "socks routing installed");
        Self { saved: Some(saved) }
    }
}

impl Drop for ProxyScope {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            state::replace(saved);
            tracing::debug!("socks routing restored");
        }
    }
}

/// Runs `body` with all outbound connections routed through `host:port`.
///
/// The previous routing state is restored whether `body` completes,
/// returns an error, or unwinds. Errors produced by `body` are never
/// suppressed. Concurrent brackets are serialized by a process-wide
/// mutex held for the duration of `body`.
pub fn run_scoped<T>(host: &str, port: u16, body: impl FnOnce() -> T) -> T {
    let _serial = SCOPE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _scope = ProxyScope::enter(host, port);
    body()
}
