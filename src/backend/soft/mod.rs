// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Software implementations of [`backend`] capabilities, built on the
//! RustCrypto hash crates and a pair of checksum crates.
//!
//! Both [`Registry`] and [`Mhash`] are unit structs, so they can be
//! referenced from `'static` [`backend::Environment`]s for free.

use digest::DynDigest;

#[cfg(doc)]
use crate::backend;

mod mhash;
mod registry;

pub use mhash::Mhash;
pub use registry::Registry;

/// A way of computing a raw digest.
#[derive(Copy, Clone)]
pub(crate) enum Routine {
    /// A full-length digest from a RustCrypto hasher.
    Digest(fn() -> Box<dyn DynDigest>),
    /// The first `n` bytes of a RustCrypto digest.
    Truncated(fn() -> Box<dyn DynDigest>, usize),
    /// A 32-bit checksum, emitted big-endian.
    Checksum(fn(&[u8]) -> u32),
}

impl Routine {
    /// Runs this routine over `data`.
    pub(crate) fn run(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Digest(new) => {
                let mut hasher = new();
                hasher.update(data);
                hasher.finalize().into_vec()
            }
            Self::Truncated(new, n) => {
                let mut hasher = new();
                hasher.update(data);
                let mut out = hasher.finalize().into_vec();
                out.truncate(n);
                out
            }
            Self::Checksum(f) => f(data).to_be_bytes().to_vec(),
        }
    }

    /// The number of bytes [`Routine::run()`] produces.
    #[cfg(test)]
    pub(crate) fn output_len(self) -> usize {
        match self {
            Self::Digest(new) => new().output_size(),
            Self::Truncated(_, n) => n,
            Self::Checksum(_) => 4,
        }
    }
}

/// Boxes up a fresh `D`.
pub(crate) fn boxed<D: DynDigest + Default + 'static>() -> Box<dyn DynDigest> {
    Box::new(D::default())
}

const CRC32_BZIP2: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_BZIP2);
const CRC32_ISO_HDLC: crc::Crc<u32> =
    crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// The `crc32` checksum: the one bzip2 uses, with its bytes reversed.
///
/// Classic `crc32` digests store this CRC least-significant byte first, so
/// the big-endian [`Routine::Checksum`] output must see it swapped.
pub(crate) fn crc32(data: &[u8]) -> u32 {
    CRC32_BZIP2.checksum(data).swap_bytes()
}

/// The `crc32b` checksum, which is the one zlib and Ethernet use.
pub(crate) fn crc32b(data: &[u8]) -> u32 {
    CRC32_ISO_HDLC.checksum(data)
}

pub(crate) fn adler32(data: &[u8]) -> u32 {
    adler2::adler32_slice(data)
}

/// Hex-encodes `raw` unless `binary` is set.
pub(crate) fn encode(raw: Vec<u8>, binary: bool) -> Vec<u8> {
    if binary {
        raw
    } else {
        hex::encode(raw).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn checksums() {
        assert_eq!(Routine::Checksum(crc32).run(b"abc"), [0x73, 0xbb, 0x8c, 0x64]);
        assert_eq!(Routine::Checksum(crc32b).run(b"abc"), [0x35, 0x24, 0x41, 0xc2]);
        assert_eq!(Routine::Checksum(adler32).run(b"abc"), [0x02, 0x4d, 0x01, 0x27]);
        assert_eq!(Routine::Checksum(crc32).output_len(), 4);
    }

    #[test]
    fn truncation() {
        let full = Routine::Digest(boxed::<tiger::Tiger>).run(b"abc");
        let short = Routine::Truncated(boxed::<tiger::Tiger>, 16).run(b"abc");
        assert_eq!(full.len(), 24);
        assert_eq!(short, &full[..16]);
    }

    #[test]
    fn encoding() {
        assert_eq!(encode(vec![0xab, 0x01], true), [0xab, 0x01]);
        assert_eq!(encode(vec![0xab, 0x01], false), b"ab01");
    }
}
