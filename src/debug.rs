// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Errors and logging.
//!
//! Without the `log` feature, every log statement in this crate compiles to
//! nothing, format strings included. Code outside this module logs through
//! the macros below, never through [`log`] itself.

use core::fmt;

#[cfg(doc)]
use __raw_log as log;

/// A `hashfacade` error, wrapping one of the crate's error enums.
///
/// Refer to this type as `hashfacade::Error`. Values are only produced by
/// [`fail!`] and [`check!`], which log the error on the way out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error<E> {
    inner: E,
}

impl<E> Error<E> {
    #[doc(hidden)]
    pub fn __new(inner: E) -> Self {
        Self { inner }
    }

    /// Converts the wrapped error into `F`.
    pub fn cast<F: From<E>>(self) -> Error<F> {
        Error {
            inner: self.inner.into(),
        }
    }

    /// Gets the wrapped error.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E> AsRef<E> for Error<E> {
    fn as_ref(&self) -> &E {
        &self.inner
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Error<E> {}

/// Implements `From<Error<$from>> for Error<$to>` via [`Error::cast()`].
///
/// A blanket impl would overlap with `impl<T> From<T> for T`.
macro_rules! debug_from {
    ($to:ty => $from:ty) => {
        impl From<$crate::Error<$from>> for $crate::Error<$to> {
            fn from(e: $crate::Error<$from>) -> Self {
                e.cast()
            }
        }
    };
}

/// Returns `$error`, logged, unless `$cond` holds.
macro_rules! check {
    ($cond:expr, $error:expr) => {
        if !$cond {
            let error = $error;
            return fail!(
                error,
                "check failure: `{}`; returned {:?}",
                stringify!($cond),
                error,
            );
        }
    };
}

/// Logs `$error` and evaluates to `Err(hashfacade::Error)` wrapping it.
///
/// Write `return fail!(e)` wherever `return Err(e)` would go.
macro_rules! fail {
    ($error:expr, $($format:tt)+) => {{
        error!($($format)+);
        Err($crate::debug::Error::__new($error))
    }};
    ($error:expr) => {{
        let error = $error;
        error!("generated error: `{:?}`", error);
        Err($crate::debug::Error::__new(error))
    }};
}

/// Redactable [`log::trace!()`].
macro_rules! trace {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::trace!($($args)*);
    }
}

/// Redactable [`log::info!()`].
macro_rules! info {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::info!($($args)*);
    }
}

/// Redactable [`log::warn!()`].
macro_rules! warn {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::warn!($($args)*);
    }
}

/// Redactable [`log::error!()`].
macro_rules! error {
    ($($args:tt)*) => {
        #[cfg(feature = "log")]
        let _ = __raw_log::error!($($args)*);
    }
}

/// Installs a logger for the test binary before `main()` runs.
#[cfg(test)]
#[ctor::ctor]
fn init_test_logger() {
    env_logger::builder()
        .is_test(true)
        .format(|_, record| {
            // Printed with eprintln! so the harness captures it per test.
            eprintln!(
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args(),
            );
            Ok(())
        })
        .init();
}

#[cfg(test)]
mod tests {
    use crate::backend;
    use crate::crypt;

    fn unspecified() -> crate::Result<(), backend::Error> {
        fail!(backend::Error::Unspecified)
    }

    fn lifted() -> crate::Result<(), crypt::Error> {
        unspecified()?;
        Ok(())
    }

    #[test]
    fn errors_convert_through_debug_from() {
        let err = lifted().unwrap_err();
        assert_eq!(err.as_ref(), &crypt::Error::Backend(backend::Error::Unspecified));
        assert_eq!(err.to_string(), "backend failure: unspecified backend failure");
    }
}
