// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Pluggable hashing backends.
//!
//! `hashfacade` does not compute digests itself. Instead, it relies on one of
//! three kinds of hashing capability, each with a slightly different shape:
//! - a [`Registry`] advertises a list of names and hashes by name;
//! - a [`Legacy`] hasher is addressed by numeric [`HashId`] constants, and
//!   only ever produces raw digests;
//! - a [`Tls`] digest function takes OpenSSL-style names, and encodes its own
//!   output.
//!
//! The capabilities a process can see are collected into an [`Environment`].
//! [`Environment::host()`] describes the capabilities compiled into this
//! crate; tests and integrations with their own hashing stacks can assemble
//! an `Environment` by hand.
//!
//! It is recommended to not import the traits in this module directly, since
//! they are easy to confuse with the implementations in [`soft`]. Instead,
//! use partially-qualified names like `backend::Registry`.

use core::fmt;

use enumflags2::bitflags;
use enumflags2::BitFlags;

#[cfg(feature = "ring")]
pub mod ring;
pub mod soft;

/// The names a legacy mhash-style hasher may serve.
///
/// Every one of these names has a `MHASH_*` constant; not every constant has
/// a name here. A name is only resolved to the hasher if
/// [`Legacy::supports()`] also accepts it.
pub const LEGACY_ALGOS: &[&str] = &[
    "adler32",
    "crc32",
    "crc32b",
    "gost",
    "haval128",
    "haval160",
    "haval192",
    "haval256",
    "md4",
    "md5",
    "ripemd160",
    "sha1",
    "sha256",
    "tiger",
    "tiger128",
    "tiger160",
];

/// The names a TLS-library digest function may serve.
///
/// These are OpenSSL spellings: see [`tls_alias()`]. A name is only resolved
/// to the digest function if [`Tls::supports()`] also accepts it.
pub const TLS_ALGOS: &[&str] = &[
    "md2", "md4", "mdc2", "rmd160", "sha", "sha1", "sha224", "sha256",
    "sha384", "sha512",
];

/// Rewrites a lower-cased algorithm name into the spelling the TLS library
/// uses for it.
///
/// Only `ripemd160` has a different spelling (`rmd160`); all other names pass
/// through. Applying this function twice is the same as applying it once.
pub fn tls_alias(algorithm: &str) -> &str {
    match algorithm {
        "ripemd160" => "rmd160",
        other => other,
    }
}

/// A kind of hashing backend.
///
/// The discriminants are bit flags, so that a set of kinds can be stored as a
/// [`BitFlags<Kind>`]; see [`Environment::available()`].
#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Kind {
    /// A generic hash registry; see [`Registry`].
    GenericRegistry = 0b001,
    /// A legacy, extension-based hasher; see [`Legacy`].
    LegacyExtension = 0b010,
    /// A TLS-library digest function; see [`Tls`].
    TlsLibrary = 0b100,
}

impl Kind {
    /// Every kind, in the order they are probed during resolution.
    pub const PROBE_ORDER: [Kind; 3] =
        [Self::GenericRegistry, Self::LegacyExtension, Self::TlsLibrary];

    /// Returns a short, human-readable name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GenericRegistry => "generic-registry",
            Self::LegacyExtension => "legacy-extension",
            Self::TlsLibrary => "tls-library",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned by a hashing backend.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Indicates that the backend recognizes `algorithm`, but has no routine
    /// linked in that can compute it.
    Unavailable {
        /// The name or constant the backend was asked for.
        algorithm: String,
    },

    /// Indicates an unspecified, internal error.
    Unspecified,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unavailable { algorithm } => {
                write!(f, "no routine available for `{}`", algorithm)
            }
            Self::Unspecified => f.write_str("unspecified backend failure"),
        }
    }
}

/// A numeric constant naming an algorithm for a [`Legacy`] hasher.
///
/// The values are the ones classic mhash uses; constants are looked up by
/// name through [`Legacy::constant()`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct HashId(pub u32);

#[allow(missing_docs)]
impl HashId {
    pub const CRC32: Self = Self(0);
    pub const MD5: Self = Self(1);
    pub const SHA1: Self = Self(2);
    pub const HAVAL256: Self = Self(3);
    pub const RIPEMD160: Self = Self(5);
    pub const TIGER192: Self = Self(7);
    pub const GOST: Self = Self(8);
    pub const CRC32B: Self = Self(9);
    pub const HAVAL224: Self = Self(10);
    pub const HAVAL192: Self = Self(11);
    pub const HAVAL160: Self = Self(12);
    pub const HAVAL128: Self = Self(13);
    pub const TIGER128: Self = Self(14);
    pub const TIGER160: Self = Self(15);
    pub const MD4: Self = Self(16);
    pub const SHA256: Self = Self(17);
    pub const ADLER32: Self = Self(18);
    pub const SHA224: Self = Self(19);
    pub const SHA512: Self = Self(20);
    pub const SHA384: Self = Self(21);
    pub const WHIRLPOOL: Self = Self(22);
    pub const RIPEMD128: Self = Self(23);
    pub const RIPEMD256: Self = Self(24);
    pub const RIPEMD320: Self = Self(25);
    pub const MD2: Self = Self(28);
}

/// Returns the conventional constant name for `algorithm`, e.g.
/// `MHASH_SHA256` for `sha256`.
pub fn legacy_constant_name(algorithm: &str) -> String {
    format!("MHASH_{}", algorithm.to_ascii_uppercase())
}

/// A generic hash registry, which can list the algorithms it knows.
pub trait Registry: Send + Sync {
    /// Returns every algorithm name this registry knows, in lower case.
    fn algorithms(&self) -> &[&'static str];

    /// Hashes `data` with `algorithm`.
    ///
    /// If `binary` is false, the output is lower-case hex text.
    fn digest(
        &self,
        algorithm: &str,
        data: &[u8],
        binary: bool,
    ) -> crate::Result<Vec<u8>, Error>;

    /// Returns whether `algorithm` appears in [`Registry::algorithms()`].
    fn supports(&self, algorithm: &str) -> bool {
        self.algorithms().contains(&algorithm)
    }
}
impl dyn Registry {} // Ensure object-safe.

/// A legacy hasher, addressed by numeric constants.
pub trait Legacy: Send + Sync {
    /// Looks up the constant called `name`, such as `MHASH_MD5`.
    fn constant(&self, name: &str) -> Option<HashId>;

    /// Hashes `data` with the algorithm named by `id`, returning the raw
    /// digest.
    fn digest(&self, id: HashId, data: &[u8]) -> crate::Result<Vec<u8>, Error>;

    /// Returns whether this hasher can compute the lower-cased `algorithm`.
    ///
    /// By default, every name with a constant is assumed computable.
    fn supports(&self, algorithm: &str) -> bool {
        self.constant(&legacy_constant_name(algorithm)).is_some()
    }
}
impl dyn Legacy {} // Ensure object-safe.

/// A TLS-library digest function.
pub trait Tls: Send + Sync {
    /// Hashes `data` with the OpenSSL-named `algorithm`.
    ///
    /// If `binary` is false, the output is lower-case hex text.
    fn digest(
        &self,
        data: &[u8],
        algorithm: &str,
        binary: bool,
    ) -> crate::Result<Vec<u8>, Error>;

    /// Returns whether this digest function can compute the OpenSSL-named
    /// `algorithm`.
    fn supports(&self, algorithm: &str) -> bool {
        let _ = algorithm;
        true
    }
}
impl dyn Tls {} // Ensure object-safe.

/// The hashing capabilities visible to a process.
///
/// A missing capability is `None`; presence is all that is checked, there is
/// no versioning.
#[derive(Copy, Clone, Default)]
pub struct Environment<'a> {
    /// A generic hash registry, if one is present.
    pub registry: Option<&'a dyn Registry>,
    /// A legacy hasher, if one is present.
    pub legacy: Option<&'a dyn Legacy>,
    /// A TLS-library digest function, if one is present.
    pub tls: Option<&'a dyn Tls>,
}

impl Environment<'static> {
    /// Returns the capabilities compiled into this crate.
    ///
    /// Each capability is controlled by a feature flag: `registry` exposes
    /// [`soft::Registry`], `legacy` exposes [`soft::Mhash`] and `ring`
    /// exposes [`ring::Digester`].
    pub fn host() -> Self {
        Self {
            #[cfg(feature = "registry")]
            registry: Some(&soft::Registry),
            #[cfg(not(feature = "registry"))]
            registry: None,
            #[cfg(feature = "legacy")]
            legacy: Some(&soft::Mhash),
            #[cfg(not(feature = "legacy"))]
            legacy: None,
            #[cfg(feature = "ring")]
            tls: Some(&ring::Digester),
            #[cfg(not(feature = "ring"))]
            tls: None,
        }
    }
}

impl Environment<'_> {
    /// Returns the set of backend kinds present in this environment.
    pub fn available(&self) -> BitFlags<Kind> {
        let mut kinds = BitFlags::empty();
        if self.registry.is_some() {
            kinds |= Kind::GenericRegistry;
        }
        if self.legacy.is_some() {
            kinds |= Kind::LegacyExtension;
        }
        if self.tls.is_some() {
            kinds |= Kind::TlsLibrary;
        }
        kinds
    }

    /// Returns whether the backend of the given kind is present, lists the
    /// lower-cased `algorithm` among the names it serves, and can actually
    /// compute it.
    ///
    /// For [`Kind::TlsLibrary`], `algorithm` is rewritten with
    /// [`tls_alias()`] first.
    pub fn serves(&self, kind: Kind, algorithm: &str) -> bool {
        match kind {
            Kind::GenericRegistry => {
                self.registry.map_or(false, |r| r.supports(algorithm))
            }
            Kind::LegacyExtension => self.legacy.map_or(false, |l| {
                LEGACY_ALGOS.contains(&algorithm) && l.supports(algorithm)
            }),
            Kind::TlsLibrary => {
                let algorithm = tls_alias(algorithm);
                self.tls.map_or(false, |t| {
                    TLS_ALGOS.contains(&algorithm) && t.supports(algorithm)
                })
            }
        }
    }

    /// Returns every name the backend of the given kind serves, in the
    /// spelling that backend uses.
    pub fn served(&self, kind: Kind) -> Vec<&'static str> {
        let names = match kind {
            Kind::GenericRegistry => match self.registry {
                Some(r) => r.algorithms(),
                None => &[],
            },
            Kind::LegacyExtension => LEGACY_ALGOS,
            Kind::TlsLibrary => TLS_ALGOS,
        };
        names
            .iter()
            .copied()
            .filter(|name| self.serves(kind, name))
            .collect()
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Environment")
            .field("available", &self.available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tls_alias_is_idempotent() {
        assert_eq!(tls_alias("ripemd160"), "rmd160");
        assert_eq!(tls_alias(tls_alias("ripemd160")), "rmd160");
        assert_eq!(tls_alias("sha256"), "sha256");
    }

    #[test]
    fn legacy_constant_names() {
        assert_eq!(legacy_constant_name("sha256"), "MHASH_SHA256");
        assert_eq!(legacy_constant_name("tiger128"), "MHASH_TIGER128");
    }

    #[test]
    fn empty_environment_serves_nothing() {
        let env = Environment::default();
        assert!(env.available().is_empty());
        for kind in Kind::PROBE_ORDER {
            assert!(!env.serves(kind, "md5"));
        }
    }

    #[test]
    fn host_environment_matches_features() {
        let env = Environment::host();
        assert_eq!(
            env.available().contains(Kind::GenericRegistry),
            cfg!(feature = "registry")
        );
        assert_eq!(
            env.available().contains(Kind::LegacyExtension),
            cfg!(feature = "legacy")
        );
        assert_eq!(
            env.available().contains(Kind::TlsLibrary),
            cfg!(feature = "ring")
        );
    }

    #[test]
    fn serves_uses_tls_spelling() {
        let env = Environment::host();
        if cfg!(feature = "ring") {
            assert!(env.serves(Kind::TlsLibrary, "ripemd160"));
            assert!(env.serves(Kind::TlsLibrary, "rmd160"));
            assert!(!env.serves(Kind::TlsLibrary, "md5"));
            assert!(!env.serves(Kind::TlsLibrary, "mdc2"));
        }
    }

    #[test]
    #[cfg(feature = "legacy")]
    fn host_does_not_serve_uncomputable_names() {
        let env = Environment::host();
        assert!(env.serves(Kind::LegacyExtension, "tiger160"));
        for name in ["haval128", "haval160", "haval192", "haval256"] {
            assert!(!env.serves(Kind::LegacyExtension, name), "{}", name);
        }
        assert!(!env.served(Kind::LegacyExtension).contains(&"haval128"));
        assert_eq!(env.served(Kind::LegacyExtension).len(), LEGACY_ALGOS.len() - 4);
    }

    #[test]
    fn served_is_empty_without_backends() {
        let env = Environment::default();
        for kind in Kind::PROBE_ORDER {
            assert!(env.served(kind).is_empty());
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(Kind::GenericRegistry.to_string(), "generic-registry");
        assert_eq!(Kind::LegacyExtension.to_string(), "legacy-extension");
        assert_eq!(Kind::TlsLibrary.to_string(), "tls-library");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn kind_serde() {
        let json = serde_json::to_string(&Kind::TlsLibrary).unwrap();
        assert_eq!(json, "\"tls-library\"");
        let kind: Kind = serde_json::from_str("\"legacy-extension\"").unwrap();
        assert_eq!(kind, Kind::LegacyExtension);
    }
}
