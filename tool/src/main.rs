// Copyright lowRISC contributors.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! `hashfacade-tool` is a simple command-line tool for hashing data through
//! the backends `hashfacade` finds in its host environment.
//!
//! Set `RUST_LOG=info` to see which backend each name resolves to.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use hashfacade::backend::Environment;
use hashfacade::backend::Kind;
use hashfacade::crypt;

use serde::Serialize;

use structopt::StructOpt;

#[macro_use]
mod util;

/// The names one backend serves.
#[derive(Debug, Serialize)]
struct Listing {
    kind: Kind,
    algorithms: Vec<&'static str>,
}

/// Lists the names served by each backend present in `env`, in probe order.
fn listings(env: &Environment<'static>) -> Vec<Listing> {
    Kind::PROBE_ORDER
        .iter()
        .filter(|&&kind| env.available().contains(kind))
        .map(|&kind| Listing {
            kind,
            algorithms: env.served(kind),
        })
        .collect()
}

/// Hashes everything in `input` and writes the digest to `output`.
///
/// Hex digests are followed by a newline; binary ones are written as-is.
fn hash(
    resolver: &crypt::Resolver,
    algorithm: &str,
    binary: bool,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    let digest = resolver.hash(algorithm, &data, binary)?;
    output.write_all(&digest)?;
    if !binary {
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}

#[deny(missing_docs)]
#[derive(Debug, StructOpt)]
#[structopt(
    author,
    about = "Command-line tool for hashing through hashfacade backends"
)]
enum CliCommand {
    /// Hash a file with the named algorithm.
    Hash {
        /// The algorithm to hash with, such as `sha256`.
        #[structopt(short = "a", long)]
        algorithm: String,

        /// Whether to output the raw digest instead of hex.
        #[structopt(short = "b", long)]
        binary: bool,

        /// File to hash; defaults to stdin.
        #[structopt(short = "i", long, parse(from_os_str))]
        input: Option<PathBuf>,

        /// Output file; defaults to stdout.
        #[structopt(short = "o", long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// List the algorithms each available backend serves, as JSON.
    Algorithms {
        /// Whether to pretty-print the resulting JSON.
        #[structopt(short = "p", long)]
        pretty: bool,

        /// JSON output file; defaults to stdout.
        #[structopt(short = "o", long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// Show which backend would serve an algorithm.
    Which {
        /// The algorithm to resolve.
        #[structopt(short = "a", long)]
        algorithm: String,
    },
}

fn main() {
    env_logger::init();

    let resolver = crypt::host();
    match CliCommand::from_args() {
        CliCommand::Hash {
            algorithm,
            binary,
            input,
            output,
        } => {
            let (input, output) = util::stdio(input, output);
            check!(
                hash(resolver, &algorithm, binary, input, output),
                "failed to hash with `{}`",
                algorithm
            );
        }
        CliCommand::Algorithms { pretty, output } => {
            let output = util::stdout_or(output);
            let listings = listings(resolver.environment());
            check!(
                if pretty {
                    serde_json::to_writer_pretty(output, &listings)
                } else {
                    serde_json::to_writer(output, &listings)
                },
                "failed to serialize to JSON"
            );
        }
        CliCommand::Which { algorithm } => {
            let route = check!(
                resolver.which(&algorithm),
                "failed to resolve `{}`",
                algorithm
            );
            println!("{}", route);
        }
    }
}
