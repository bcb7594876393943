//! Process-wide SOCKS routing state
//!
//! A single mutable configuration cell read by whatever transport layer
//! honours SOCKS routing. Scopes save and restore it around intercepted
//! calls; nothing owns it outright.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Snapshot of the process-wide socket routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocksProxyState {
    /// Proxy host to route through, `None` when routing directly.
    pub host: Option<String>,
    /// Proxy port; meaningless unless `enabled`.
    pub port: u16,
    /// Whether outbound connections are routed through the proxy.
    pub enabled: bool,
}

impl Default for SocksProxyState {
    fn default() -> Self {
        Self::direct()
    }
}

impl SocksProxyState {
    /// Routing state for direct, unproxied connections.
    #[must_use]
    pub fn direct() -> Self {
        Self { host: None, port: 0, enabled: false }
    }

    /// Routing state sending all outbound connections through `host:port`.
    #[must_use]
    pub fn through(host: impl Into<String>, port: u16) -> Self {
        Self { host: Some(host.into()), port, enabled: true }
    }
}

static SOCKS_PROXY: Lazy<Mutex<SocksProxyState>> =
    Lazy::new(|| Mutex::new(SocksProxyState::direct()));

fn cell() -> MutexGuard<'static, SocksProxyState> {
    // A panicking scope body must not wedge later scopes.
    SOCKS_PROXY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns a snapshot of the current routing state.
#[must_use]
pub fn snapshot() -> SocksProxyState {
    cell().clone()
}

/// Replaces the routing state, returning the previous value.
pub(crate) fn replace(next: SocksProxyState) -> SocksProxyState {
    std::mem::replace(&mut *cell(), next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_state_is_disabled() {
        let state = SocksProxyState::direct();
        assert!(!state.enabled);
        assert!(state.host.is_none());
    }

    #[test]
    fn test_through_state_is_enabled() {
        let state = SocksProxyState::through("127.0.0.1", 4443);
        assert!(state.enabled);
        assert_eq!(state.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(state.port, 4443);
    }
}
