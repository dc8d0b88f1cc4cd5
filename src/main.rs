// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary for the command line of cayley-search: `cayley`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cayley_search::families::{random_group, Family};
use cayley_search::{
    direct_product, find_isomorphism, find_subgroup, has_identity, has_unique_inverses,
    is_associative, is_commutative, is_group, is_normal_subgroup, subgroup_embeddings,
    FiniteAlgebra, TableEnumerator,
};
use cli::{CliApp, Command, EnumerateArgs};

fn build(family: Family) -> Result<FiniteAlgebra> {
    family.build().with_context(|| format!("building {}", family))
}

fn label(algebra: &FiniteAlgebra) -> String {
    algebra
        .name()
        .map_or_else(|| format!("order {}", algebra.order()), str::to_string)
}

fn enumerate(args: &EnumerateArgs) -> Result<()> {
    let enumerator = TableEnumerator::new(args.order, args.flags())?;
    log::info!("Enumerating {:?} tables of order {}", enumerator.strategy(), args.order);

    let mut tables = enumerator.iter();
    let mut count = 0;
    for table in tables.by_ref().take(args.limit.unwrap_or(usize::MAX)) {
        count += 1;
        println!("#{}\n{}", count, table);
    }
    log::info!("Statistics: {}", tables.statistics());
    println!("{} tables", count);
    Ok(())
}

fn check(algebra: &FiniteAlgebra) {
    print!("{}", algebra);
    let Some(table) = algebra.table() else {
        return;
    };
    println!("identity:      {}", has_identity(table));
    println!("inverses:      {}", has_unique_inverses(table));
    println!("associative:   {}", is_associative(table));
    println!("commutative:   {}", is_commutative(table));
    println!("group:         {}", is_group(algebra));
}

fn run(cli: CliApp) -> Result<()> {
    match cli.command {
        Command::Enumerate(args) => enumerate(&args)?,
        Command::Check { algebra } => check(&build(algebra)?),
        Command::Isomorphic { a, b } => {
            let (a, b) = (build(a)?, build(b)?);
            match find_isomorphism(&a, &b)? {
                Some(mapping) => println!("{} ≅ {} via {:?}", label(&a), label(&b), mapping),
                None => println!("{} and {} are not isomorphic", label(&a), label(&b)),
            }
        }
        Command::Subgroup { sub, host, all } => {
            let (sub, host) = (build(sub)?, build(host)?);
            if all {
                let mut count = 0;
                for mapping in subgroup_embeddings(&sub, &host)? {
                    count += 1;
                    println!("{:?}", mapping);
                }
                println!("{} embeddings of {} in {}", count, label(&sub), label(&host));
            } else {
                match find_subgroup(&sub, &host)? {
                    Some(mapping) => println!("{} ≤ {} via {:?}", label(&sub), label(&host), mapping),
                    None => println!("{} is not a subgroup of {}", label(&sub), label(&host)),
                }
            }
        }
        Command::Normal { sub, host } => {
            let (sub, host) = (build(sub)?, build(host)?);
            let normal = is_normal_subgroup(&sub, &host)?;
            println!(
                "{} is {}a normal subgroup of {}",
                label(&sub),
                if normal { "" } else { "not " },
                label(&host)
            );
        }
        Command::Product { a, b } => {
            print!("{}", direct_product(&build(a)?, &build(b)?)?);
        }
        Command::Random {
            order,
            seed,
            max_attempts,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            print!("{}", random_group(order, &mut rng, max_attempts)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    run(cli).unwrap_or_else(|err| {
        log::error!("{:#}", err);
        std::process::exit(1)
    })
}
