use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a DNS resolution failure.
pub fn dns<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Dns).with(e.into())
}

/// Creates an `Error` for a connection timeout.
pub fn connect_timeout<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::ConnectTimeout).with(e.into())
}

/// Creates an `Error` for a connection reset by the peer.
pub fn connection_reset<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::ConnectionReset).with(e.into())
}

/// Creates an `Error` for a refused connection.
pub fn connection_refused<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::ConnectionRefused).with(e.into())
}

/// Creates an `Error` for a generic operation timeout.
pub fn timeout<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Timeout).with(e.into())
}

/// Creates an `Error` for a TLS failure.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Tls).with(e.into())
}

/// Creates an `Error` for a failed proxy launch.
pub fn launch<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Launch).with(e.into())
}

/// Creates an `Error` for an application-level failure in the wrapped client.
pub fn application<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Application).with(e.into())
}
