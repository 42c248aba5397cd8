use clap::{Command, arg, value_parser};

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Summarize the grove built from a BED file")
        .arg_required_else_help(true)
        .arg(arg!(-u --universe <universe> "BED file (optionally gzipped) to index").required(true))
        .arg(arg!(--order <order> "B+ tree order (maximum children per node)").value_parser(value_parser!(usize)))
        .arg(arg!(--config <config> "TOML file with grove settings"))
        .arg(arg!(--sorted "The universe is sorted per chromosome; use the sorted fast path"))
}
