// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! `hashfacade` is a static hashing facade: callers name a digest algorithm,
//! and the facade works out which of the hashing backends available in the
//! host environment can compute it.
//!
//! Three kinds of backend are understood, probed in this order:
//! 1. A generic hash registry, which advertises the algorithms it knows
//!    (see [`backend::Registry`]).
//! 2. A legacy mhash-style hasher, addressed by numeric algorithm constants
//!    (see [`backend::Legacy`]).
//! 3. A TLS-library digest function with OpenSSL-style names
//!    (see [`backend::Tls`]).
//!
//! `hashfacade` does not implement any hash algorithm itself; it only selects
//! and invokes existing implementations. Software implementations of all
//! three backends are provided in [`backend::soft`] and [`backend::ring`];
//! which of them the process-wide host environment exposes is controlled by
//! the `registry`, `legacy` and `ring` feature flags.
//!
//! Most users only need [`hash()`]:
//! ```
//! let hex = hashfacade::hash("MD5", b"abc", false).unwrap();
//! assert_eq!(hex, b"900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! Callers that want a different set of backends, or a different caching
//! policy, construct their own [`crypt::Resolver`].

#![deny(missing_docs)]
#![deny(unsafe_code)]

#[macro_use]
mod debug;

pub mod backend;
pub mod crypt;

pub use crypt::hash;
pub use debug::Error;

/// A [`core::result::Result`] whose error is wrapped in [`Error`].
pub type Result<T, E> = core::result::Result<T, Error<E>>;
