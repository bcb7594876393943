//! # Sockscope Public API
//!
//! Transparent call interception through a local SOCKS proxy with
//! automatic bastion recovery, behind a fluent builder.
//!
//! ```no_run
//! use serde_json::{json, Value};
//! use sockscope::{client_fn, Error, Sockscope};
//!
//! fn fetch_nodes(op: &str, _args: &[Value]) -> Result<Value, Error> {
//!     // adapter over the real client goes here
//!     Ok(json!({ "operation": op }))
//! }
//!
//! let mut remote = Sockscope::wrap(client_fn(fetch_nodes))
//!     .local_port(4443)
//!     .attempts(3)
//!     .build()
//!     .expect("valid interceptor configuration");
//!
//! let nodes = remote.invoke("fetch_nodes", &[]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the client package
pub use sockscope_client::{
    client_fn, default_error_handler, launcher_fn, CallInterceptor, ClientFn, CommandLauncher,
    Error, ErrorHandler, InterceptorConfig, Kind, LauncherFn, NetworkErrorClass, ProxyLauncher,
    ProxyScope, RemoteClient, SocksProxyState,
};
pub use sockscope_client::run_scoped;

/// Main Sockscope entry point providing static builder methods
pub struct Sockscope;

impl Sockscope {
    /// Wrap a client with the default interceptor configuration
    ///
    /// Shorthand for `InterceptorBuilder::new(client)`
    pub fn wrap<C: RemoteClient>(client: C) -> InterceptorBuilder<C, CommandLauncher> {
        InterceptorBuilder::new(client)
    }
}

/// Wrap a client with the default interceptor configuration
///
/// Shorthand for `InterceptorBuilder::new(client)`
pub fn wrap<C: RemoteClient>(client: C) -> InterceptorBuilder<C, CommandLauncher> {
    InterceptorBuilder::new(client)
}
