use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use sockscope_client::error::constructors;
use sockscope_client::proxy::{self, run_scoped, ProxyScope, SocksProxyState};
use sockscope_client::Error;

// Tests in this file observe the process-global routing state, so they
// serialize against each other on top of the scope's own lock.
static TEST_LOCK: Mutex<()> = Mutex::new(());

fn serial() -> std::sync::MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_run_scoped_installs_target() {
    let _serial = serial();
    run_scoped("127.0.0.1", 4443, || {
        assert_eq!(proxy::snapshot(), SocksProxyState::through("127.0.0.1", 4443));
    });
}

#[test]
fn test_run_scoped_restores_after_success() {
    let _serial = serial();
    let before = proxy::snapshot();
    run_scoped("127.0.0.1", 4443, || ());
    assert_eq!(proxy::snapshot(), before);
}

#[test]
fn test_run_scoped_restores_after_error() {
    let _serial = serial();
    let before = proxy::snapshot();
    let result: Result<(), Error> = run_scoped("127.0.0.1", 4443, || {
        Err(constructors::connection_refused(std::io::Error::from(
            std::io::ErrorKind::ConnectionRefused,
        )))
    });
    assert!(result.is_err(), "the body's error must not be suppressed");
    assert_eq!(proxy::snapshot(), before);
}

#[test]
fn test_run_scoped_restores_after_panic() {
    let _serial = serial();
    let before = proxy::snapshot();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        run_scoped("127.0.0.1", 4443, || panic!("cancelled mid-call"));
    }));
    assert!(outcome.is_err());
    assert_eq!(proxy::snapshot(), before);
}

#[test]
fn test_run_scoped_returns_body_value() {
    let _serial = serial();
    let value = run_scoped("127.0.0.1", 4443, || 42);
    assert_eq!(value, 42);
}

#[test]
fn test_nested_scopes_restore_lifo() {
    let _serial = serial();
    let before = proxy::snapshot();

    let outer = ProxyScope::enter("127.0.0.1", 4443);
    assert_eq!(proxy::snapshot(), SocksProxyState::through("127.0.0.1", 4443));

    {
        let _inner = ProxyScope::enter("127.0.0.1", 9999);
        assert_eq!(proxy::snapshot(), SocksProxyState::through("127.0.0.1", 9999));
    }

    // Inner scope gone: outer target visible again.
    assert_eq!(proxy::snapshot(), SocksProxyState::through("127.0.0.1", 4443));

    drop(outer);
    assert_eq!(proxy::snapshot(), before);
}

#[test]
fn test_sequential_scopes_are_independent() {
    let _serial = serial();
    let before = proxy::snapshot();
    run_scoped("127.0.0.1", 4443, || ());
    run_scoped("127.0.0.1", 8443, || {
        assert_eq!(proxy::snapshot(), SocksProxyState::through("127.0.0.1", 8443));
    });
    assert_eq!(proxy::snapshot(), before);
}
