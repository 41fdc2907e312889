// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! A legacy hasher in the style of mhash: algorithms are addressed by
//! numeric constants, and output is always raw.

use crate::backend;
use crate::backend::soft::adler32;
use crate::backend::soft::boxed;
use crate::backend::soft::crc32;
use crate::backend::soft::crc32b;
use crate::backend::legacy_constant_name;
use crate::backend::soft::Routine;
use crate::backend::HashId;

/// The named constants, including the `MHASH_TIGER` alias for
/// `MHASH_TIGER192`.
const CONSTANTS: &[(&str, HashId)] = &[
    ("MHASH_CRC32", HashId::CRC32),
    ("MHASH_MD5", HashId::MD5),
    ("MHASH_SHA1", HashId::SHA1),
    ("MHASH_HAVAL256", HashId::HAVAL256),
    ("MHASH_RIPEMD160", HashId::RIPEMD160),
    ("MHASH_TIGER", HashId::TIGER192),
    ("MHASH_TIGER192", HashId::TIGER192),
    ("MHASH_GOST", HashId::GOST),
    ("MHASH_CRC32B", HashId::CRC32B),
    ("MHASH_HAVAL224", HashId::HAVAL224),
    ("MHASH_HAVAL192", HashId::HAVAL192),
    ("MHASH_HAVAL160", HashId::HAVAL160),
    ("MHASH_HAVAL128", HashId::HAVAL128),
    ("MHASH_TIGER128", HashId::TIGER128),
    ("MHASH_TIGER160", HashId::TIGER160),
    ("MHASH_MD4", HashId::MD4),
    ("MHASH_SHA256", HashId::SHA256),
    ("MHASH_ADLER32", HashId::ADLER32),
    ("MHASH_SHA224", HashId::SHA224),
    ("MHASH_SHA512", HashId::SHA512),
    ("MHASH_SHA384", HashId::SHA384),
    ("MHASH_WHIRLPOOL", HashId::WHIRLPOOL),
    ("MHASH_RIPEMD128", HashId::RIPEMD128),
    ("MHASH_RIPEMD256", HashId::RIPEMD256),
    ("MHASH_RIPEMD320", HashId::RIPEMD320),
    ("MHASH_MD2", HashId::MD2),
];

fn routine(id: HashId) -> Option<Routine> {
    let routine = match id {
        HashId::CRC32 => Routine::Checksum(crc32),
        HashId::CRC32B => Routine::Checksum(crc32b),
        HashId::ADLER32 => Routine::Checksum(adler32),
        HashId::MD2 => Routine::Digest(boxed::<md2::Md2>),
        HashId::MD4 => Routine::Digest(boxed::<md4::Md4>),
        HashId::MD5 => Routine::Digest(boxed::<md5::Md5>),
        HashId::SHA1 => Routine::Digest(boxed::<sha1::Sha1>),
        HashId::SHA224 => Routine::Digest(boxed::<sha2::Sha224>),
        HashId::SHA256 => Routine::Digest(boxed::<sha2::Sha256>),
        HashId::SHA384 => Routine::Digest(boxed::<sha2::Sha384>),
        HashId::SHA512 => Routine::Digest(boxed::<sha2::Sha512>),
        HashId::RIPEMD128 => Routine::Digest(boxed::<ripemd::Ripemd128>),
        HashId::RIPEMD160 => Routine::Digest(boxed::<ripemd::Ripemd160>),
        HashId::RIPEMD256 => Routine::Digest(boxed::<ripemd::Ripemd256>),
        HashId::RIPEMD320 => Routine::Digest(boxed::<ripemd::Ripemd320>),
        HashId::WHIRLPOOL => Routine::Digest(boxed::<whirlpool::Whirlpool>),
        HashId::GOST => Routine::Digest(boxed::<gost94::Gost94Test>),
        HashId::TIGER128 => Routine::Truncated(boxed::<tiger::Tiger>, 16),
        HashId::TIGER160 => Routine::Truncated(boxed::<tiger::Tiger>, 20),
        HashId::TIGER192 => Routine::Digest(boxed::<tiger::Tiger>),
        // No HAVAL implementation is linked in.
        _ => return None,
    };
    Some(routine)
}

/// A [`backend::Legacy`] hasher over the RustCrypto hash crates.
#[derive(Copy, Clone, Default, Debug)]
pub struct Mhash;

impl backend::Legacy for Mhash {
    fn constant(&self, name: &str) -> Option<HashId> {
        CONSTANTS
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, id)| id)
    }

    fn supports(&self, algorithm: &str) -> bool {
        self.constant(&legacy_constant_name(algorithm))
            .and_then(routine)
            .is_some()
    }

    fn digest(
        &self,
        id: HashId,
        data: &[u8],
    ) -> crate::Result<Vec<u8>, backend::Error> {
        match routine(id) {
            Some(r) => Ok(r.run(data)),
            None => {
                let algorithm = CONSTANTS
                    .iter()
                    .find(|&&(_, i)| i == id)
                    .map_or_else(|| format!("{:?}", id), |&(n, _)| n.to_string());
                fail!(backend::Error::Unavailable { algorithm })
            }
        }
    }
}
