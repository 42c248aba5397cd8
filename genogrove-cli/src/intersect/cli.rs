use clap::{Command, arg, value_parser};

pub const INTERSECT_CMD: &str = "intersect";

pub fn create_intersect_cli() -> Command {
    Command::new(INTERSECT_CMD)
        .about("Report universe intervals overlapping each query interval")
        .arg_required_else_help(true)
        .arg(arg!(-u --universe <universe> "BED file (optionally gzipped) to index").required(true))
        .arg(arg!(-q --query <query> "BED file (optionally gzipped) with query intervals").required(true))
        .arg(arg!(--order <order> "B+ tree order (maximum children per node)").value_parser(value_parser!(usize)))
        .arg(arg!(--config <config> "TOML file with grove settings"))
        .arg(arg!(--sorted "The universe is sorted per chromosome; use the sorted fast path"))
}
