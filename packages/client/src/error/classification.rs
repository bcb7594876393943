use std::fmt;
use std::io;
use std::sync::Arc;

use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.kind(), Kind::Timeout | Kind::ConnectTimeout) {
            return true;
        }

        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            if let Some(io) = err.downcast_ref::<io::Error>() {
                if io.kind() == io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the error is related to connecting to the peer.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(
            self.kind(),
            Kind::ConnectTimeout | Kind::ConnectionReset | Kind::ConnectionRefused
        )
    }

    /// Returns true if the error is a TLS/secure-transport failure.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        matches!(self.kind(), Kind::Tls)
    }

    /// Returns true if the error came from the proxy-launch collaborator.
    #[must_use]
    pub fn is_launch(&self) -> bool {
        matches!(self.kind(), Kind::Launch)
    }
}

/// Maps a raw socket error onto the interceptor's taxonomy.
///
/// Adapters bridging concrete clients onto [`RemoteClient`] use this to
/// classify `io::Error`s before handing them to the interceptor.
///
/// [`RemoteClient`]: crate::intercept::RemoteClient
#[must_use]
pub fn classify_io(err: &io::Error) -> Kind {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => Kind::ConnectionRefused,
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            Kind::ConnectionReset
        }
        io::ErrorKind::TimedOut => Kind::ConnectTimeout,
        _ => Kind::Application,
    }
}

type Predicate = Arc<dyn Fn(&Error) -> bool + Send + Sync>;

/// The set of error kinds treated as "proxy likely down".
///
/// This is configuration data rather than control flow: the interceptor
/// only ever asks [`NetworkErrorClass::matches`] and never inspects kinds
/// itself, so hosts can widen or narrow the taxonomy without touching the
/// recovery protocol. A custom predicate covers framework-specific errors
/// that do not map onto a built-in [`Kind`].
#[derive(Clone)]
pub struct NetworkErrorClass {
    kinds: Vec<Kind>,
    predicate: Option<Predicate>,
}

impl Default for NetworkErrorClass {
    fn default() -> Self {
        Self {
            kinds: vec![
                Kind::Dns,
                Kind::ConnectTimeout,
                Kind::ConnectionReset,
                Kind::ConnectionRefused,
                Kind::Timeout,
                Kind::Tls,
            ],
            predicate: None,
        }
    }
}

impl NetworkErrorClass {
    /// Creates the default taxonomy: DNS, connect timeout, reset, refused,
    /// generic timeout and TLS failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty taxonomy that matches nothing.
    #[must_use]
    pub fn none() -> Self {
        Self { kinds: Vec::new(), predicate: None }
    }

    /// Extends the taxonomy with an additional kind.
    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Removes a kind from the taxonomy.
    #[must_use]
    pub fn without_kind(mut self, kind: Kind) -> Self {
        self.kinds.retain(|k| *k != kind);
        self
    }

    /// Installs a host-supplied predicate for framework-specific errors
    /// that have no built-in [`Kind`].
    #[must_use]
    pub fn with_predicate(
        mut self,
        predicate: impl Fn(&Error) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Returns true if `err` should be treated as a recoverable network
    /// failure.
    #[must_use]
    pub fn matches(&self, err: &Error) -> bool {
        if self.kinds.contains(&err.kind()) {
            return true;
        }
        self.predicate.as_deref().is_some_and(|p| p(err))
    }

    /// The kinds currently in the taxonomy.
    #[must_use]
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }
}

impl fmt::Debug for NetworkErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkErrorClass")
            .field("kinds", &self.kinds)
            .field("predicate", &self.predicate.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::constructors;

    #[test]
    fn test_default_class_matches_network_kinds() {
        let class = NetworkErrorClass::default();
        assert!(class.matches(&constructors::dns(io::Error::other("no such host"))));
        assert!(class.matches(&constructors::connection_refused(io::Error::other("refused"))));
        assert!(class.matches(&constructors::tls(io::Error::other("bad cert"))));
    }

    #[test]
    fn test_default_class_rejects_application_and_launch() {
        let class = NetworkErrorClass::default();
        assert!(!class.matches(&constructors::application(io::Error::other("403"))));
        assert!(!class.matches(&constructors::launch(io::Error::other("spawn failed"))));
    }

    #[test]
    fn test_custom_predicate_extends_class() {
        let class = NetworkErrorClass::default()
            .with_predicate(|err| err.operation() == Some("sync_artifacts"));
        let err = constructors::application(io::Error::other("framework connection error"))
            .with_operation("sync_artifacts");
        assert!(class.matches(&err));
    }

    #[test]
    fn test_without_kind_narrows_class() {
        let class = NetworkErrorClass::default().without_kind(Kind::Tls);
        assert!(!class.matches(&constructors::tls(io::Error::other("bad cert"))));
    }

    #[test]
    fn test_classify_io_maps_connect_errors() {
        assert_eq!(
            classify_io(&io::Error::from(io::ErrorKind::ConnectionRefused)),
            Kind::ConnectionRefused
        );
        assert_eq!(
            classify_io(&io::Error::from(io::ErrorKind::ConnectionReset)),
            Kind::ConnectionReset
        );
        assert_eq!(
            classify_io(&io::Error::from(io::ErrorKind::TimedOut)),
            Kind::ConnectTimeout
        );
        assert_eq!(
            classify_io(&io::Error::other("unrelated")),
            Kind::Application
        );
    }
}
