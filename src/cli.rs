// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line arguments of `cayley`.

use clap::{Args, Parser, Subcommand};

use cayley_search::families::{Family, DEFAULT_MAX_ATTEMPTS};
use cayley_search::AxiomFlags;

/// Enumerate and compare finite groups, loops and monoids given as Cayley tables.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct CliApp {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print every table of an order that satisfies the chosen axioms
    Enumerate(EnumerateArgs),
    /// Print an algebra's table and which axioms it satisfies
    Check {
        /// Algebra: z:N, dih:N, klein, sym:N, psl:N:Q or psu:N:Q
        algebra: Family,
    },
    /// Test whether two algebras are isomorphic
    Isomorphic { a: Family, b: Family },
    /// Test whether one algebra embeds in another
    Subgroup {
        sub: Family,
        host: Family,
        /// Print every embedding instead of the first
        #[arg(long)]
        all: bool,
    },
    /// Test whether one algebra embeds in another as a normal subgroup
    Normal { sub: Family, host: Family },
    /// Print the direct product of two algebras
    Product { a: Family, b: Family },
    /// Print a random group found by rejection sampling
    Random {
        order: usize,
        /// Seed for a reproducible table
        #[arg(long)]
        seed: Option<u64>,
        /// Give up after this many random tables
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
}

#[derive(Args, Debug)]
pub(crate) struct EnumerateArgs {
    /// Number of elements
    pub(crate) order: usize,
    /// Do not require unique inverses
    #[arg(long)]
    no_invertibility: bool,
    /// Do not require associativity
    #[arg(long)]
    no_associativity: bool,
    /// Do not require an identity (not supported yet)
    #[arg(long)]
    no_identity: bool,
    /// Require commutativity (not supported yet)
    #[arg(long)]
    commutative: bool,
    /// Stop after this many tables
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

impl EnumerateArgs {
    pub(crate) fn flags(&self) -> AxiomFlags {
        AxiomFlags {
            enforce_identity: !self.no_identity,
            enforce_invertibility: !self.no_invertibility,
            enforce_associativity: !self.no_associativity,
            enforce_commutativity: self.commutative,
        }
    }
}

/// Cli Arguments related to logging
#[derive(Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
}

impl LoggingArgs {
    /// Sets the log level from `-v` (info, debug, trace) or `-q` (error),
    /// falling back to `RUST_LOG` and then to `warn`.
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_env("RUST_LOG");
        if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}
