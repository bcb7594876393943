use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `sockscope_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors surfaced by intercepted client calls.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) operation: Option<String>,
}

/// Error categories the interceptor distinguishes between.
///
/// The network-facing variants make up the default "proxy likely down"
/// taxonomy; `Launch` marks failures of the proxy-launch collaborator and
/// `Application` covers everything the wrapped client raises that is not
/// a connectivity problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// DNS resolution failure
    Dns,
    /// Connection attempt timed out
    ConnectTimeout,
    /// Connection reset by the peer
    ConnectionReset,
    /// Connection refused by the peer
    ConnectionRefused,
    /// Generic operation timeout
    Timeout,
    /// TLS/secure-transport failure
    Tls,
    /// Proxy-launch collaborator failure
    Launch,
    /// Application-level error from the wrapped client
    Application,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None, operation: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// Attaches the name of the intercepted operation for error reporting.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.inner.operation = Some(operation.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Get the operation name associated with this error, if any
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.inner.operation.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("sockscope::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref operation) = self.inner.operation {
            f.field("operation", operation);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Dns => f.write_str("dns resolution error"),
            Kind::ConnectTimeout => f.write_str("connection attempt timed out"),
            Kind::ConnectionReset => f.write_str("connection reset by peer"),
            Kind::ConnectionRefused => f.write_str("connection refused"),
            Kind::Timeout => f.write_str("operation timeout"),
            Kind::Tls => f.write_str("tls handshake or transport error"),
            Kind::Launch => f.write_str("proxy launch error"),
            Kind::Application => f.write_str("wrapped client error"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
