// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Known-answer digests, taken from the published test suites of each
//! algorithm.
//!
//! Algorithm names use the generic-registry spelling.

/// A single known answer.
#[derive(Copy, Clone, Debug)]
pub struct Vector {
    pub algorithm: &'static str,
    pub input: &'static [u8],
    pub hex: &'static str,
}

/// The 448-bit message from FIPS 180-2, appendix B.2.
pub const LONG_INPUT: &[u8] =
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// SHA-256 of the empty string, as raw bytes.
pub const SHA256_EMPTY: [u8; 32] = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8,
    0x99, 0x6f, 0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c,
    0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

pub const MD5_ABC: &str = "900150983cd24fb0d6963f7d28e17f72";

pub const ALL: &[Vector] = &[
    Vector {
        algorithm: "md2",
        input: b"abc",
        hex: "da853b0d3f88d99b30283a69e6ded6bb",
    },
    Vector {
        algorithm: "md4",
        input: b"abc",
        hex: "a448017aaf21d8525fc10ae87aa6729d",
    },
    Vector {
        algorithm: "md5",
        input: b"",
        hex: "d41d8cd98f00b204e9800998ecf8427e",
    },
    Vector {
        algorithm: "md5",
        input: b"abc",
        hex: MD5_ABC,
    },
    Vector {
        algorithm: "sha1",
        input: b"",
        hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    Vector {
        algorithm: "sha1",
        input: b"abc",
        hex: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    Vector {
        algorithm: "sha1",
        input: LONG_INPUT,
        hex: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    Vector {
        algorithm: "sha224",
        input: b"abc",
        hex: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    },
    Vector {
        algorithm: "sha256",
        input: b"",
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    Vector {
        algorithm: "sha256",
        input: b"abc",
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Vector {
        algorithm: "sha256",
        input: LONG_INPUT,
        hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    Vector {
        algorithm: "sha384",
        input: b"abc",
        hex: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163\
              1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    Vector {
        algorithm: "sha512",
        input: b"abc",
        hex: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
              2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    Vector {
        algorithm: "sha3-256",
        input: b"abc",
        hex: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    },
    Vector {
        algorithm: "ripemd160",
        input: b"abc",
        hex: "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
    },
    Vector {
        algorithm: "crc32",
        input: b"abc",
        hex: "73bb8c64",
    },
    Vector {
        algorithm: "crc32b",
        input: b"abc",
        hex: "352441c2",
    },
    Vector {
        algorithm: "adler32",
        input: b"abc",
        hex: "024d0127",
    },
];
