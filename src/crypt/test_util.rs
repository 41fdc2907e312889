// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Test-only fake backends.

use std::sync::Mutex;

use crate::backend;

/// A [`backend::Tls`] that records the names it is asked for, and answers
/// with a tag derived from the name and input rather than a real digest.
#[derive(Default)]
pub struct RecordingTls {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingTls {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl backend::Tls for RecordingTls {
    fn digest(
        &self,
        data: &[u8],
        algorithm: &str,
        binary: bool,
    ) -> crate::Result<Vec<u8>, backend::Error> {
        self.calls.lock().unwrap().push(algorithm.to_string());
        let mut tag = format!("{}:{}:", algorithm, binary).into_bytes();
        tag.extend_from_slice(data);
        Ok(tag)
    }
}

/// A [`backend::Registry`] that advertises a fixed list of names but fails
/// every digest.
pub struct BrokenRegistry(pub &'static [&'static str]);

impl backend::Registry for BrokenRegistry {
    fn algorithms(&self) -> &[&'static str] {
        self.0
    }

    fn digest(
        &self,
        _: &str,
        _: &[u8],
        _: bool,
    ) -> crate::Result<Vec<u8>, backend::Error> {
        fail!(backend::Error::Unspecified)
    }
}
