use clap::Parser;
use colored::Colorize;
use lem_in::cli::init_tracing;
use lem_in::prelude::*;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "ERROR:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let farm = parse_farm(&args.map)?;

    // nothing reaches stdout unless the whole run succeeds
    let started = Instant::now();
    let plan = Planner::new(args.routing_config()).plan(&farm)?;
    let log = plan.simulate(&farm)?;
    let elapsed = started.elapsed();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !args.quiet {
        for line in &farm.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    log.write_to(&farm.graph, &mut out)?;
    out.flush()?;

    if args.stats {
        plan.print_summary(&farm, &log, elapsed);
    }

    Ok(())
}
