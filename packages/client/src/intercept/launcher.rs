//! Proxy-launch collaborator
//!
//! The external operation that brings the bastion tunnel up. Its failure
//! mode is opaque from the interceptor's perspective: any non-success
//! outcome is a launch failure.

use std::io;
use std::process::Command;

use crate::error::{constructors, Error};

/// External collaborator that starts the bastion proxy.
///
/// After a successful `start`, connections to the configured local proxy
/// port are expected to be serviceable.
pub trait ProxyLauncher {
    /// Attempts to bring the proxy up.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Launch`](crate::error::Kind::Launch) error on any
    /// non-success outcome.
    fn start(&mut self) -> Result<(), Error>;
}

/// Adapts a closure to the [`ProxyLauncher`] interface.
///
/// Built with [`launcher_fn`].
#[derive(Debug, Clone)]
pub struct LauncherFn<F> {
    f: F,
}

/// Wraps a `FnMut()` closure as a [`ProxyLauncher`].
pub fn launcher_fn<F>(f: F) -> LauncherFn<F>
where
    F: FnMut() -> Result<(), Error>,
{
    LauncherFn { f }
}

impl<F> ProxyLauncher for LauncherFn<F>
where
    F: FnMut() -> Result<(), Error>,
{
    fn start(&mut self) -> Result<(), Error> {
        (self.f)()
    }
}

/// Launches the bastion tunnel through an external command.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
}

impl CommandLauncher {
    /// Creates a launcher running `program` with `args`.
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The conventional `bastion start` launch command.
    #[must_use]
    pub fn bastion_start() -> Self {
        Self::new("bastion", ["start"])
    }
}

impl ProxyLauncher for CommandLauncher {
    fn start(&mut self) -> Result<(), Error> {
        log::debug!("launching bastion proxy: {} {:?}", self.program, self.args);
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(constructors::launch)?;

        if status.success() {
            Ok(())
        } else {
            Err(constructors::launch(io::Error::other(format!(
                "launch command exited with {status}"
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_launcher_failure_is_launch_kind() {
        // `false` exits non-zero on any POSIX system.
        let mut launcher = CommandLauncher::new("false", Vec::<String>::new());
        let err = launcher.start().expect_err("non-zero exit should fail");
        assert!(err.is_launch());
    }

    #[test]
    fn test_missing_program_is_launch_kind() {
        let mut launcher =
            CommandLauncher::new("definitely-not-a-real-program-sockscope", ["start"]);
        let err = launcher.start().expect_err("missing program should fail");
        assert!(err.is_launch());
    }
}
