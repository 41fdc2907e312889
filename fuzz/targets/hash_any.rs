// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Fuzz tests for name resolution: arbitrary names and data go through the
//! process-wide facade.
//!
//! The first input byte picks how long the name is.

#![no_main]

use libfuzzer_sys::fuzz_target;

use hashfacade::crypt::Error;

fuzz_target!(|data: &[u8]| {
    let (len, rest) = match data.split_first() {
        Some((&len, rest)) => (usize::from(len).min(rest.len()), rest),
        None => return,
    };
    let (name, input) = rest.split_at(len);
    let name = match std::str::from_utf8(name) {
        Ok(name) => name,
        Err(_) => return,
    };

    let hex = hashfacade::hash(name, input, false);
    let raw = hashfacade::hash(name, input, true);
    match (hex, raw) {
        (Ok(hex), Ok(raw)) => {
            assert_eq!(hex.len(), 2 * raw.len());
            assert_eq!(hex::decode(&hex).unwrap(), raw);
        }
        (Err(hex), Err(raw)) => {
            assert_eq!(hex, raw);
            if let Error::UnsupportedAlgorithm(n) = hex.into_inner() {
                assert_eq!(n, name);
            }
        }
        (hex, raw) => panic!("mismatch: {:?} vs {:?}", hex, raw),
    }
});
