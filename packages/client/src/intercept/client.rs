//! Narrow invocation surface for wrapped clients
//!
//! Instead of reflecting over an arbitrary object's methods at runtime,
//! concrete clients are adapted onto this interface once, at build time:
//! an adapter maps each named operation onto the underlying client and
//! carries arguments and results as opaque JSON values. The interceptor
//! forwards both verbatim and never validates them.

use serde_json::Value;

use crate::error::Error;

/// A client whose operations can be forwarded by name.
pub trait RemoteClient {
    /// Invokes `operation` with `args`, forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying client produced, classified
    /// onto the [`Kind`](crate::error::Kind) taxonomy by the adapter.
    fn invoke(&mut self, operation: &str, args: &[Value]) -> Result<Value, Error>;
}

impl RemoteClient for Box<dyn RemoteClient + Send> {
    fn invoke(&mut self, operation: &str, args: &[Value]) -> Result<Value, Error> {
        (**self).invoke(operation, args)
    }
}

/// Adapts a closure to the [`RemoteClient`] interface.
///
/// Built with [`client_fn`].
#[derive(Debug, Clone)]
pub struct ClientFn<F> {
    f: F,
}

/// Wraps a `FnMut(operation, args)` closure as a [`RemoteClient`].
pub fn client_fn<F>(f: F) -> ClientFn<F>
where
    F: FnMut(&str, &[Value]) -> Result<Value, Error>,
{
    ClientFn { f }
}

impl<F> RemoteClient for ClientFn<F>
where
    F: FnMut(&str, &[Value]) -> Result<Value, Error>,
{
    fn invoke(&mut self, operation: &str, args: &[Value]) -> Result<Value, Error> {
        (self.f)(operation, args)
    }
}
