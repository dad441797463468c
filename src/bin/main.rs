#[macro_use]
extern crate log;

use std::env;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use command_score::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("cscore: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> CscoreOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("cscore")));
    args.extend(
        env::var("CSCORE_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    CscoreOptions::parse_from(args)
}

/// Candidates, and the catalog they come from when there is one
fn load_candidates(opts: &CscoreOptions) -> Result<(Vec<Candidate>, Option<Catalog>)> {
    match &opts.catalog {
        Some(path) => {
            let catalog = Catalog::open(path).wrap_err_with(|| format!("failed to load catalog {path}"))?;
            Ok((catalog.candidates(), Some(catalog)))
        }
        None => {
            let candidates = read_candidates(io::stdin().lock(), &ReaderOption::from_options(opts))?;
            Ok((candidates, None))
        }
    }
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let opts = parse_args();
    debug!("options: {opts:?}");

    let (candidates, catalog) = load_candidates(&opts)?;
    if opts.print_value && catalog.is_none() {
        warn!("--print-value has no effect without --catalog");
    }
    let ranker = Ranker::from_options(&opts);
    let matched = ranker.rank(&opts.query, &candidates);
    debug!("{} of {} candidates matched {:?}", matched.len(), candidates.len(), opts.query);

    let output_ending = opts.output_ending();
    let mut stdout = BufWriter::new(io::stdout().lock());

    if opts.print_query {
        write!(stdout, "{}{}", opts.query, output_ending)?;
    }

    for item in &matched {
        if opts.print_score {
            write!(stdout, "{:.6}\t", item.score)?;
        }
        if opts.print_value
            && let Some(game_item) = catalog.as_ref().and_then(|catalog| catalog.items().get(item.index))
        {
            write!(stdout, "{}\t", format_value(game_item.value, false))?;
        }
        write!(stdout, "{}{}", item.candidate, output_ending)?;
    }

    stdout.flush()?;

    Ok(if matched.is_empty() { 1 } else { 0 })
}
