mod intersect;
mod loader;
mod stats;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "genogrove";
    pub const BIN_NAME: &str = "genogrove";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("genogrove")
        .about("Index genomic intervals in B+ trees, one per chromosome, and query them for overlaps.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose ... "Increase logging verbosity (-v info, -vv debug)").global(true))
        .subcommand(intersect::cli::create_intersect_cli())
        .subcommand(stats::cli::create_stats_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // INTERSECT
        //
        Some((intersect::cli::INTERSECT_CMD, matches)) => {
            intersect::handlers::run_intersect(matches)?;
        }

        //
        // STATS
        //
        Some((stats::cli::STATS_CMD, matches)) => {
            stats::handlers::run_stats(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
