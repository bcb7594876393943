//! Call interception and bounded recovery
//!
//! Wraps an arbitrary client behind a narrow invocation interface, runs
//! each call inside a scoped SOCKS routing bracket, and recovers from
//! network-classified failures by launching the bastion proxy and
//! retrying within a shared attempt budget.

mod client;
mod interceptor;
mod launcher;

pub use client::{client_fn, ClientFn, RemoteClient};
pub use interceptor::CallInterceptor;
pub use launcher::{launcher_fn, CommandLauncher, LauncherFn, ProxyLauncher};
