// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! An implementation of [`backend::Tls`] based on `ring`.
//!
//! `ring` only carries the digests a modern TLS stack needs, so the older
//! OpenSSL names (`md2`, `md4`, `rmd160`, `sha224`) are computed with the
//! RustCrypto hashers from [`backend::soft`] instead. `mdc2` and `sha` (the
//! withdrawn SHA-0) have no implementation at all; [`Digester`] does not
//! claim them, so they never resolve to this backend.
//!
//! The [`ring` warranty disclaimer] applies to this module as well.
//!
//! [`ring` warranty disclaimer]: https://github.com/briansmith/ring/blob/main/README.md

use ring::digest;

use crate::backend;
use crate::backend::soft::boxed;
use crate::backend::soft::encode;
use crate::backend::soft::Routine;

enum Engine {
    Ring(&'static digest::Algorithm),
    Soft(Routine),
}

/// A `ring`-based [`backend::Tls`].
#[derive(Copy, Clone, Default, Debug)]
pub struct Digester;

impl Digester {
    fn engine(name: &str) -> Option<Engine> {
        let engine = match name {
            "sha1" => Engine::Ring(&digest::SHA1_FOR_LEGACY_USE_ONLY),
            "sha256" => Engine::Ring(&digest::SHA256),
            "sha384" => Engine::Ring(&digest::SHA384),
            "sha512" => Engine::Ring(&digest::SHA512),
            "md2" => Engine::Soft(Routine::Digest(boxed::<md2::Md2>)),
            "md4" => Engine::Soft(Routine::Digest(boxed::<md4::Md4>)),
            "rmd160" => {
                Engine::Soft(Routine::Digest(boxed::<ripemd::Ripemd160>))
            }
            "sha224" => Engine::Soft(Routine::Digest(boxed::<sha2::Sha224>)),
            _ => return None,
        };
        Some(engine)
    }
}

impl backend::Tls for Digester {
    fn digest(
        &self,
        data: &[u8],
        algorithm: &str,
        binary: bool,
    ) -> crate::Result<Vec<u8>, backend::Error> {
        let raw = match Self::engine(algorithm) {
            Some(Engine::Ring(algo)) => {
                digest::digest(algo, data).as_ref().to_vec()
            }
            Some(Engine::Soft(routine)) => routine.run(data),
            None => {
                return fail!(backend::Error::Unavailable {
                    algorithm: algorithm.to_string(),
                })
            }
        };
        Ok(encode(raw, binary))
    }

    fn supports(&self, algorithm: &str) -> bool {
        Self::engine(algorithm).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::tls_alias;
    use crate::backend::Tls as _;
    use crate::backend::TLS_ALGOS;
    use pretty_assertions::assert_eq;
    use testutil::data::vectors;

    #[test]
    fn known_answers() {
        let mut checked = 0;
        for v in vectors::ALL {
            let name = tls_alias(v.algorithm);
            if !Digester.supports(name) {
                continue;
            }
            let hex = Digester.digest(v.input, name, false).unwrap();
            assert_eq!(std::str::from_utf8(&hex).unwrap(), v.hex, "{}", name);
            checked += 1;
        }
        assert!(checked >= 10);
    }

    #[test]
    fn rmd160_is_ripemd160() {
        let hex = Digester.digest(b"abc", "rmd160", false).unwrap();
        assert_eq!(hex, b"8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
    }

    #[test]
    fn binary_matches_hex() {
        for name in ["sha384", "md4", "sha224"] {
            let raw = Digester.digest(vectors::LONG_INPUT, name, true).unwrap();
            let hex = Digester.digest(vectors::LONG_INPUT, name, false).unwrap();
            assert_eq!(hex.len(), 2 * raw.len(), "{}", name);
            assert_eq!(hex::decode(hex).unwrap(), raw, "{}", name);
        }
    }

    #[test]
    fn supported_names() {
        let supported: Vec<_> = TLS_ALGOS
            .iter()
            .copied()
            .filter(|name| Digester.supports(name))
            .collect();
        assert_eq!(
            supported,
            ["md2", "md4", "rmd160", "sha1", "sha224", "sha256", "sha384", "sha512"]
        );
    }

    #[test]
    fn unimplemented_names_are_unavailable() {
        for name in ["mdc2", "sha"] {
            let err = Digester.digest(b"abc", name, false).unwrap_err();
            assert_eq!(
                err.into_inner(),
                backend::Error::Unavailable {
                    algorithm: name.to_string()
                }
            );
        }
    }
}
