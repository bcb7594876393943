//! Core `InterceptorBuilder` structure and fluent configuration methods
//!
//! Builds a [`CallInterceptor`] around a wrapped client with a fluent
//! interface over the proxy target, recovery budget, failure taxonomy,
//! launcher and exhaustion handler.

use std::sync::Arc;

use serde_json::Value;

// Re-export types from the client package
pub use sockscope_client::{
    CallInterceptor, CommandLauncher, Error, InterceptorConfig, Kind, NetworkErrorClass,
    ProxyLauncher, RemoteClient,
};

/// Fluent builder for a [`CallInterceptor`].
///
/// Starts from the default configuration (loopback proxy on port 4443,
/// three recovery attempts, the built-in network-error taxonomy and the
/// stdout warning handler) and the conventional `bastion start` launcher.
pub struct InterceptorBuilder<C, L> {
    client: C,
    launcher: L,
    config: InterceptorConfig,
}

impl<C: RemoteClient> InterceptorBuilder<C, CommandLauncher> {
    /// Starts a builder wrapping `client`.
    pub fn new(client: C) -> Self {
        Self {
            client,
            launcher: CommandLauncher::bastion_start(),
            config: InterceptorConfig::default(),
        }
    }
}

impl<C, L> InterceptorBuilder<C, L>
where
    C: RemoteClient,
    L: ProxyLauncher,
{
    /// Sets the local SOCKS proxy port (default 4443).
    #[must_use]
    pub fn local_port(mut self, port: u16) -> Self {
        self.config.local_proxy_port = port;
        self
    }

    /// Sets the proxy host (default loopback).
    #[must_use]
    pub fn proxy_host(mut self, host: impl Into<String>) -> Self {
        self.config.proxy_host = host.into();
        self
    }

    /// Sets the shared recovery attempt budget (default 3).
    #[must_use]
    pub fn attempts(mut self, attempts: u32) -> Self {
        self.config.max_recovery_attempts = attempts;
        self
    }

    /// Replaces the network-error taxonomy wholesale.
    #[must_use]
    pub fn network_errors(mut self, class: NetworkErrorClass) -> Self {
        self.config.network_errors = class;
        self
    }

    /// Adds a single kind to the network-error taxonomy.
    #[must_use]
    pub fn treat_as_network(mut self, kind: Kind) -> Self {
        self.config.network_errors = self.config.network_errors.with_kind(kind);
        self
    }

    /// Replaces the exhaustion handler.
    #[must_use]
    pub fn error_handler(
        mut self,
        handler: impl Fn(Error) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        self.config.error_handler = Arc::new(handler);
        self
    }

    /// Replaces the proxy-launch collaborator.
    #[must_use]
    pub fn launcher<L2: ProxyLauncher>(self, launcher: L2) -> InterceptorBuilder<C, L2> {
        InterceptorBuilder {
            client: self.client,
            launcher,
            config: self.config,
        }
    }

    /// Validates the configuration and builds the interceptor.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid configuration field.
    pub fn build(self) -> Result<CallInterceptor<C, L>, String> {
        self.config.validate()?;
        log::debug!(
            "building interceptor: proxy {}:{}, {} recovery attempts",
            self.config.proxy_host,
            self.config.local_proxy_port,
            self.config.max_recovery_attempts
        );
        Ok(CallInterceptor::new(self.client, self.launcher, self.config))
    }
}
