//! # Sockscope Client
//!
//! Transparent network-call interception through a local SOCKS proxy
//! with automatic bastion recovery.
//!
//! The crate manages the *scope and lifecycle* of routing decisions, not
//! the tunnel itself: a [`ProxyScope`] temporarily rewrites the
//! process-wide socket routing state with guaranteed restoration, and a
//! [`CallInterceptor`] forwards every operation of a wrapped client
//! through such a scope, classifying network failures and driving a
//! bounded launch-and-retry recovery protocol when the proxy is down.
//!
//! ## Features
//!
//! - **Scoped routing** with save/restore guaranteed on every exit path
//! - **Transparent forwarding** over a narrow `invoke(name, args)` surface
//! - **Configurable failure taxonomy** via [`NetworkErrorClass`]
//! - **Bounded recovery** sharing one budget between proxy launches and
//!   operation retries
//! - **Pluggable exhaustion handling** through a configured error handler

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Core modules
pub mod config;
pub mod error;
pub mod intercept;
pub mod proxy;

// Re-export main types for convenient access
pub use config::{default_error_handler, ErrorHandler, InterceptorConfig};
pub use error::{classify_io, Error, Kind, NetworkErrorClass, Result};
pub use intercept::{
    client_fn, launcher_fn, CallInterceptor, ClientFn, CommandLauncher, LauncherFn,
    ProxyLauncher, RemoteClient,
};
pub use proxy::{run_scoped, ProxyScope, SocksProxyState};
