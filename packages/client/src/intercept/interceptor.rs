//! Transparent call interception with bounded recovery
//!
//! Every forwarded operation runs inside one proxy-scope bracket. A
//! failure matched by the configured [`NetworkErrorClass`] enters the
//! recovery protocol: launch the proxy collaborator, retry the operation,
//! and hand the last network error to the exhaustion handler once the
//! shared attempt budget runs out.
//!
//! [`NetworkErrorClass`]: crate::error::NetworkErrorClass

use serde_json::Value;

use crate::config::InterceptorConfig;
use crate::error::{Error, Result};
use crate::proxy;

use super::client::RemoteClient;
use super::launcher::ProxyLauncher;

/// Ephemeral recovery bookkeeping for a single failed invocation.
///
/// `last_error` always holds the most recent network-classified error;
/// launch failures are counted against the budget but do not replace it,
/// so the exhaustion handler receives the last *network* error.
struct RetryState {
    attempts_remaining: u32,
    last_error: Error,
}

/// Presents the wrapped client's operation surface unchanged, but runs
/// every call through a scoped SOCKS routing bracket and drives the
/// launch-and-retry recovery protocol on network-classified failures.
///
/// On any successful path the returned value is indistinguishable from a
/// direct call to the wrapped client.
pub struct CallInterceptor<C, L> {
    client: C,
    launcher: L,
    config: InterceptorConfig,
}

impl<C, L> CallInterceptor<C, L>
where
    C: RemoteClient,
    L: ProxyLauncher,
{
    /// Wraps `client`, routing its calls through the proxy target in
    /// `config` and recovering via `launcher`.
    pub fn new(client: C, launcher: L, config: InterceptorConfig) -> Self {
        Self { client, launcher, config }
    }

    /// Wraps `client` with the default configuration (loopback proxy on
    /// port 4443, three recovery attempts).
    pub fn with_defaults(client: C, launcher: L) -> Self {
        Self::new(client, launcher, InterceptorConfig::default())
    }

    /// The interceptor's construction-time configuration.
    #[must_use]
    pub fn config(&self) -> &InterceptorConfig {
        &self.config
    }

    /// Consumes the interceptor, returning the wrapped client.
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Forwards `operation` with `args` to the wrapped client inside a
    /// proxy-scope bracket.
    ///
    /// # Errors
    ///
    /// Errors outside the configured network-error class propagate
    /// unchanged and immediately. Network-classified errors trigger the
    /// recovery protocol; once its budget is exhausted the configured
    /// error handler decides the final outcome.
    pub fn invoke(&mut self, operation: &str, args: &[Value]) -> Result<Value> {
        let Self { client, launcher, config } = self;
        let config = &*config;

        proxy::run_scoped(&config.proxy_host, config.local_proxy_port, || {
            let first = match client.invoke(operation, args) {
                Ok(value) => return Ok(value),
                Err(err) if config.network_errors.matches(&err) => err,
                Err(err) => return Err(err),
            };

            tracing::warn!(operation, error = %first, "network failure, entering recovery");
            let mut state = RetryState {
                attempts_remaining: config.max_recovery_attempts.max(1),
                last_error: first,
            };

            loop {
                // One launch attempt and at most one operation retry per
                // iteration; both failure paths share the same budget.
                match launcher.start() {
                    Ok(()) => match client.invoke(operation, args) {
                        Ok(value) => return Ok(value),
                        Err(err) if config.network_errors.matches(&err) => {
                            tracing::warn!(operation, error = %err, "operation still failing after proxy launch");
                            state.last_error = err;
                        }
                        Err(err) => return Err(err),
                    },
                    Err(err) => {
                        tracing::warn!(error = %err, "proxy launch failed");
                    }
                }

                state.attempts_remaining -= 1;
                if state.attempts_remaining == 0 {
                    tracing::error!(operation, "recovery budget exhausted");
                    let handler = config.error_handler.as_ref();
                    return handler(state.last_error);
                }
            }
        })
    }
}

impl<C, L> std::fmt::Debug for CallInterceptor<C, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallInterceptor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
