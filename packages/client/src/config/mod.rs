//! Interceptor Configuration Module
//!
//! Construction-time configuration for the call interceptor: proxy
//! target, recovery budget, network-error taxonomy and the exhaustion
//! handler. Built once, immutable afterwards.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, NetworkErrorClass};

/// Default local SOCKS proxy port.
pub const DEFAULT_LOCAL_PROXY_PORT: u16 = 4443;

/// Default proxy host; the tunnel listens on loopback.
pub const DEFAULT_PROXY_HOST: &str = "127.0.0.1";

/// Default recovery attempt budget.
pub const DEFAULT_RECOVERY_ATTEMPTS: u32 = 3;

/// Handler invoked exactly once when the recovery budget is exhausted.
///
/// It receives the last network-classified error and decides the final
/// outcome of the intercepted call: re-raise it, substitute a sentinel
/// value, or not return at all.
pub type ErrorHandler = Arc<dyn Fn(Error) -> Result<Value, Error> + Send + Sync>;

/// Runtime interceptor configuration
#[derive(Clone)]
pub struct InterceptorConfig {
    /// Host of the local SOCKS proxy.
    pub proxy_host: String,
    /// Port of the local SOCKS proxy.
    pub local_proxy_port: u16,
    /// Shared budget for proxy launches and operation retries.
    pub max_recovery_attempts: u32,
    /// Errors treated as "proxy likely down".
    pub network_errors: NetworkErrorClass,
    /// Called once per exhausted recovery cycle.
    pub error_handler: ErrorHandler,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            proxy_host: DEFAULT_PROXY_HOST.to_string(),
            local_proxy_port: DEFAULT_LOCAL_PROXY_PORT,
            max_recovery_attempts: DEFAULT_RECOVERY_ATTEMPTS,
            network_errors: NetworkErrorClass::default(),
            error_handler: Arc::new(default_error_handler),
        }
    }
}

impl InterceptorConfig {
    /// Validate interceptor configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `local_proxy_port` is zero
    /// - `proxy_host` is empty
    /// - `max_recovery_attempts` is zero
    pub fn validate(&self) -> Result<(), String> {
        if self.local_proxy_port == 0 {
            return Err("local_proxy_port must be non-zero".to_string());
        }

        if self.proxy_host.is_empty() {
            return Err("proxy_host must not be empty".to_string());
        }

        if self.max_recovery_attempts == 0 {
            return Err("max_recovery_attempts must be at least 1".to_string());
        }

        Ok(())
    }
}

impl fmt::Debug for InterceptorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorConfig")
            .field("proxy_host", &self.proxy_host)
            .field("local_proxy_port", &self.local_proxy_port)
            .field("max_recovery_attempts", &self.max_recovery_attempts)
            .field("network_errors", &self.network_errors)
            .finish_non_exhaustive()
    }
}

/// Default exhaustion handler: prints operator guidance to stdout naming
/// the likely cause and the remedial command, then surfaces the original
/// error so the caller's own error reporting still fires.
pub fn default_error_handler(err: Error) -> Result<Value, Error> {
    println!();
    println!("{}", "-".repeat(80));
    println!("WARNING: Failed to contact the remote server!");
    println!("You might need to start the bastion tunnel with 'bastion start' to access it.");
    println!("{}", "-".repeat(80));
    println!();
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = InterceptorConfig::default();
        assert_eq!(config.local_proxy_port, 4443);
        assert_eq!(config.proxy_host, "127.0.0.1");
        assert_eq!(config.max_recovery_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = InterceptorConfig { local_proxy_port: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = InterceptorConfig { proxy_host: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = InterceptorConfig { max_recovery_attempts: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
