// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Options for a [`Resolver`].

use std::env;

#[cfg(doc)]
use crate::crypt::Resolver;

/// Environment variable selecting the [`Policy`] of the process-wide
/// resolver: `sticky` or `per-algorithm`.
pub const POLICY_VAR: &str = "HASHFACADE_POLICY";

/// Environment variable that disables the built-in fast path of the
/// process-wide resolver when set to `0`.
pub const BUILTINS_VAR: &str = "HASHFACADE_BUILTINS";

/// How a [`Resolver`] remembers the backends it has picked.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Policy {
    /// Every algorithm name is resolved once, independently of every other.
    PerAlgorithm,
    /// The first successful resolution picks the backend for every later
    /// call, whatever algorithm it names.
    Sticky,
}

impl Policy {
    /// Parses the spelling used by [`POLICY_VAR`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-algorithm" => Some(Self::PerAlgorithm),
            "sticky" => Some(Self::Sticky),
            _ => None,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::PerAlgorithm
    }
}

/// Options struct for initialising a [`Resolver`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Options {
    /// How resolved backends are cached.
    pub policy: Policy,
    /// Whether names with a built-in routine (`md5`, `sha1`) skip backend
    /// resolution altogether.
    pub builtins: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            builtins: true,
        }
    }
}

impl Options {
    /// Builds options from [`POLICY_VAR`] and [`BUILTINS_VAR`], falling back
    /// to the defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(val) = env::var(POLICY_VAR) {
            match Policy::parse(&val) {
                Some(policy) => opts.policy = policy,
                None => {
                    warn!("ignoring unknown {} value `{}`", POLICY_VAR, val);
                }
            }
        }
        if let Ok(val) = env::var(BUILTINS_VAR) {
            opts.builtins = val.trim() != "0";
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_policy() {
        assert_eq!(Policy::parse("sticky"), Some(Policy::Sticky));
        assert_eq!(Policy::parse(" Per-Algorithm "), Some(Policy::PerAlgorithm));
        assert_eq!(Policy::parse("sometimes"), None);
    }

    #[test]
    fn from_env() {
        // The variables are process-wide: only this test may touch them.
        env::remove_var(POLICY_VAR);
        env::remove_var(BUILTINS_VAR);
        assert_eq!(Options::from_env(), Options::default());

        env::set_var(POLICY_VAR, "sticky");
        env::set_var(BUILTINS_VAR, "0");
        assert_eq!(
            Options::from_env(),
            Options {
                policy: Policy::Sticky,
                builtins: false,
            }
        );

        env::set_var(POLICY_VAR, "PER-ALGORITHM");
        env::set_var(BUILTINS_VAR, " 1 ");
        assert_eq!(Options::from_env(), Options::default());

        env::set_var(POLICY_VAR, "sometimes");
        env::set_var(BUILTINS_VAR, " 0\n");
        assert_eq!(
            Options::from_env(),
            Options {
                policy: Policy::PerAlgorithm,
                builtins: false,
            }
        );

        env::remove_var(POLICY_VAR);
        env::remove_var(BUILTINS_VAR);
        assert_eq!(Options::from_env(), Options::default());
    }

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.policy, Policy::PerAlgorithm);
        assert!(opts.builtins);
    }
}
