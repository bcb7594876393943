//! Scoped SOCKS routing over process-wide socket configuration
//!
//! The routing decision lives in one process-global cell; [`ProxyScope`]
//! brackets temporary overrides of it with guaranteed restoration, and
//! [`run_scoped`] adds the mutual exclusion needed for concurrent use.
//! The SOCKS handshake itself belongs to the transport layer that reads
//! the state, not to this module.

mod scope;
mod state;

pub use scope::{run_scoped, ProxyScope};
pub use state::{snapshot, SocksProxyState};
