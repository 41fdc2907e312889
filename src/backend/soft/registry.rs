// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! A generic hash registry, keyed by algorithm name.

use once_cell::sync::Lazy;

use crate::backend;
use crate::backend::soft::adler32;
use crate::backend::soft::boxed;
use crate::backend::soft::crc32;
use crate::backend::soft::crc32b;
use crate::backend::soft::encode;
use crate::backend::soft::Routine;

/// Every name the registry knows, and how to compute it.
const TABLE: &[(&str, Routine)] = &[
    ("md2", Routine::Digest(boxed::<md2::Md2>)),
    ("md4", Routine::Digest(boxed::<md4::Md4>)),
    ("md5", Routine::Digest(boxed::<md5::Md5>)),
    ("sha1", Routine::Digest(boxed::<sha1::Sha1>)),
    ("sha224", Routine::Digest(boxed::<sha2::Sha224>)),
    ("sha256", Routine::Digest(boxed::<sha2::Sha256>)),
    ("sha384", Routine::Digest(boxed::<sha2::Sha384>)),
    ("sha512/224", Routine::Digest(boxed::<sha2::Sha512_224>)),
    ("sha512/256", Routine::Digest(boxed::<sha2::Sha512_256>)),
    ("sha512", Routine::Digest(boxed::<sha2::Sha512>)),
    ("sha3-224", Routine::Digest(boxed::<sha3::Sha3_224>)),
    ("sha3-256", Routine::Digest(boxed::<sha3::Sha3_256>)),
    ("sha3-384", Routine::Digest(boxed::<sha3::Sha3_384>)),
    ("sha3-512", Routine::Digest(boxed::<sha3::Sha3_512>)),
    ("ripemd128", Routine::Digest(boxed::<ripemd::Ripemd128>)),
    ("ripemd160", Routine::Digest(boxed::<ripemd::Ripemd160>)),
    ("ripemd256", Routine::Digest(boxed::<ripemd::Ripemd256>)),
    ("ripemd320", Routine::Digest(boxed::<ripemd::Ripemd320>)),
    ("whirlpool", Routine::Digest(boxed::<whirlpool::Whirlpool>)),
    ("tiger128,3", Routine::Truncated(boxed::<tiger::Tiger>, 16)),
    ("tiger160,3", Routine::Truncated(boxed::<tiger::Tiger>, 20)),
    ("tiger192,3", Routine::Digest(boxed::<tiger::Tiger>)),
    ("gost", Routine::Digest(boxed::<gost94::Gost94Test>)),
    ("gost-crypto", Routine::Digest(boxed::<gost94::Gost94CryptoPro>)),
    ("adler32", Routine::Checksum(adler32)),
    ("crc32", Routine::Checksum(crc32)),
    ("crc32b", Routine::Checksum(crc32b)),
];

static NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| TABLE.iter().map(|&(name, _)| name).collect());

fn routine(algorithm: &str) -> Option<Routine> {
    TABLE
        .iter()
        .find(|&&(name, _)| name == algorithm)
        .map(|&(_, routine)| routine)
}

/// A [`backend::Registry`] over the RustCrypto hash crates.
#[derive(Copy, Clone, Default, Debug)]
pub struct Registry;

impl backend::Registry for Registry {
    fn algorithms(&self) -> &[&'static str] {
        &NAMES
    }

    fn digest(
        &self,
        algorithm: &str,
        data: &[u8],
        binary: bool,
    ) -> crate::Result<Vec<u8>, backend::Error> {
        let routine = match routine(algorithm) {
            Some(r) => r,
            None => {
                return fail!(backend::Error::Unavailable {
                    algorithm: algorithm.to_string(),
                })
            }
        };
        Ok(encode(routine.run(data), binary))
    }
}
