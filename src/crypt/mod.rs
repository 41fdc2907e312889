// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! The hashing facade.
//!
//! A [`Resolver`] takes an algorithm name, finds a backend in its
//! [`Environment`] that can compute it, and routes the digest there. The
//! process-wide resolver behind [`hash()`] is built on first use from
//! [`Environment::host()`] and [`Options::from_env()`].
//!
//! Names are matched case-insensitively. Backends are probed in
//! [`Kind::PROBE_ORDER`]; a backend is only ever chosen if it serves the
//! requested name, so a failed probe never leaves a trace in the cache.

use core::fmt;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use once_cell::sync::OnceCell;

use crate::backend;
use crate::backend::soft::encode;
use crate::backend::Environment;
use crate::backend::Kind;

mod builtin;
mod options;

#[cfg(test)]
mod test_util;

pub use options::Options;
pub use options::Policy;
pub use options::BUILTINS_VAR;
pub use options::POLICY_VAR;

/// An error returned by the facade.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Indicates that no backend in the environment can compute the named
    /// algorithm. Carries the name exactly as the caller spelled it.
    UnsupportedAlgorithm(String),

    /// Indicates that the chosen backend failed; the backend's error is
    /// passed through untouched.
    Backend(backend::Error),
}

impl From<backend::Error> for Error {
    fn from(e: backend::Error) -> Self {
        Self::Backend(e)
    }
}

debug_from!(Error => backend::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnsupportedAlgorithm(algorithm) => write!(
                f,
                "'{}' is not supported by any available backend",
                algorithm
            ),
            Self::Backend(e) => write!(f, "backend failure: {}", e),
        }
    }
}

/// The resolution state of a [`Resolver`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    /// No name has been resolved to a backend yet.
    Unresolved,
    /// The first successful resolution picked this kind.
    ///
    /// Under [`Policy::Sticky`] every later call is served by it.
    Resolved(Kind),
}

/// Where a name would be sent by [`Resolver::hash()`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Route {
    /// A built-in routine, with no backend involved.
    Builtin,
    /// A backend of the given kind.
    Backend(Kind),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Backend(kind) => kind.fmt(f),
        }
    }
}

enum Target {
    Builtin(builtin::Builtin),
    Backend(Kind),
}

/// Resolves algorithm names to backends, and hashes through them.
///
/// A `Resolver` is safe to share between threads; its caches only ever move
/// forward, from unresolved to resolved.
pub struct Resolver<'env> {
    env: Environment<'env>,
    opts: Options,
    first: OnceCell<Kind>,
    per_algorithm: RwLock<HashMap<String, Kind>>,
}

impl<'env> Resolver<'env> {
    /// Creates a new, unresolved `Resolver` over `env`.
    pub fn new(env: Environment<'env>, opts: Options) -> Self {
        Self {
            env,
            opts,
            first: OnceCell::new(),
            per_algorithm: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the environment this resolver probes.
    pub fn environment(&self) -> &Environment<'env> {
        &self.env
    }

    /// Returns the options this resolver was created with.
    pub fn options(&self) -> Options {
        self.opts
    }

    /// Returns the current resolution state.
    pub fn state(&self) -> State {
        match self.first.get() {
            Some(&kind) => State::Resolved(kind),
            None => State::Unresolved,
        }
    }

    /// Hashes `data` with `algorithm`.
    ///
    /// If `binary` is false, the output is lower-case hex text; otherwise it
    /// is the raw digest.
    pub fn hash(
        &self,
        algorithm: &str,
        data: &[u8],
        binary: bool,
    ) -> crate::Result<Vec<u8>, Error> {
        let algo = algorithm.to_ascii_lowercase();
        match self.target(algorithm, &algo)? {
            Target::Builtin(f) => Ok(f(data, binary)),
            Target::Backend(kind) => {
                self.digest(kind, algorithm, &algo, data, binary)
            }
        }
    }

    /// Returns where [`Resolver::hash()`] would send `algorithm`, resolving
    /// (and caching) it if necessary.
    pub fn which(&self, algorithm: &str) -> crate::Result<Route, Error> {
        let algo = algorithm.to_ascii_lowercase();
        Ok(match self.target(algorithm, &algo)? {
            Target::Builtin(_) => Route::Builtin,
            Target::Backend(kind) => Route::Backend(kind),
        })
    }

    fn target(
        &self,
        requested: &str,
        algo: &str,
    ) -> crate::Result<Target, Error> {
        if self.opts.builtins {
            if let Some(f) = builtin::lookup(algo) {
                trace!("`{}` served by a built-in routine", algo);
                return Ok(Target::Builtin(f));
            }
        }
        self.select(requested, algo).map(Target::Backend)
    }

    fn select(&self, requested: &str, algo: &str) -> crate::Result<Kind, Error> {
        match self.opts.policy {
            Policy::Sticky => {
                if let Some(&kind) = self.first.get() {
                    if !self.env.serves(kind, algo) {
                        warn!(
                            "resolution is pinned to the {} backend, which cannot serve `{}`",
                            kind,
                            algo
                        );
                        return fail!(Error::UnsupportedAlgorithm(
                            requested.to_string()
                        ));
                    }
                    return Ok(kind);
                }

                let kind = self.probe(requested, algo)?;
                let pinned = *self.first.get_or_init(|| kind);
                // A concurrent first call may have won the race with a
                // different kind.
                check!(
                    pinned == kind || self.env.serves(pinned, algo),
                    Error::UnsupportedAlgorithm(requested.to_string())
                );
                Ok(pinned)
            }
            Policy::PerAlgorithm => {
                let cached = self
                    .per_algorithm
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get(algo)
                    .copied();
                if let Some(kind) = cached {
                    trace!("`{}` cached for the {} backend", algo, kind);
                    return Ok(kind);
                }

                let kind = self.probe(requested, algo)?;
                self.first.get_or_init(|| kind);
                Ok(*self
                    .per_algorithm
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(algo.to_string())
                    .or_insert(kind))
            }
        }
    }

    fn probe(&self, requested: &str, algo: &str) -> crate::Result<Kind, Error> {
        for kind in Kind::PROBE_ORDER {
            if self.env.serves(kind, algo) {
                info!("resolved `{}` to the {} backend", algo, kind);
                return Ok(kind);
            }
        }
        fail!(Error::UnsupportedAlgorithm(requested.to_string()))
    }

    fn digest(
        &self,
        kind: Kind,
        requested: &str,
        algo: &str,
        data: &[u8],
        binary: bool,
    ) -> crate::Result<Vec<u8>, Error> {
        match kind {
            Kind::GenericRegistry => {
                let registry = present(self.env.registry, requested)?;
                Ok(registry.digest(algo, data, binary)?)
            }
            Kind::LegacyExtension => {
                let legacy = present(self.env.legacy, requested)?;
                let name = backend::legacy_constant_name(algo);
                let id = match legacy.constant(&name) {
                    Some(id) => id,
                    None => {
                        return fail!(Error::Backend(
                            backend::Error::Unavailable { algorithm: name }
                        ))
                    }
                };
                Ok(encode(legacy.digest(id, data)?, binary))
            }
            Kind::TlsLibrary => {
                let tls = present(self.env.tls, requested)?;
                Ok(tls.digest(data, backend::tls_alias(algo), binary)?)
            }
        }
    }
}

fn present<'a, T: ?Sized>(
    capability: Option<&'a T>,
    requested: &str,
) -> crate::Result<&'a T, Error> {
    match capability {
        Some(c) => Ok(c),
        None => fail!(Error::UnsupportedAlgorithm(requested.to_string())),
    }
}

static HOST: Lazy<Resolver<'static>> = Lazy::new(|| {
    let env = Environment::host();
    let opts = Options::from_env();
    info!("host resolver: {:?}, {:?}", env, opts);
    Resolver::new(env, opts)
});

/// Returns the process-wide resolver used by [`hash()`].
pub fn host() -> &'static Resolver<'static> {
    &HOST
}

/// Hashes `data` with `algorithm`, using whichever backend of the host
/// environment can compute it.
///
/// If `binary` is false, the output is lower-case hex text; otherwise it is
/// the raw digest.
///
/// ```
/// let raw = hashfacade::hash("sha256", b"", true).unwrap();
/// assert_eq!(raw.len(), 32);
/// ```
pub fn hash(
    algorithm: &str,
    data: &[u8],
    binary: bool,
) -> crate::Result<Vec<u8>, Error> {
    HOST.hash(algorithm, data, binary)
}
