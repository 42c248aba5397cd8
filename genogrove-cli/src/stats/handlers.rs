use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::loader::{IntervalGrove, build_grove, resolve_config};

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let universe_file = matches
        .get_one::<String>("universe")
        .context("A path to a universe file is required.")?;

    let config = resolve_config(matches)?;
    let sorted = matches.get_flag("sorted");

    let grove = build_grove(Path::new(universe_file), config, sorted)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_stats(&grove, &mut writer)?;
    writer.flush()?;

    Ok(())
}

/// Grove summary line, then one `index\tintervals\theight` line per index in name order.
pub fn write_stats<W: Write>(grove: &IntervalGrove, writer: &mut W) -> Result<()> {
    writeln!(writer, "Grove(order={}, size={})", grove.order(), grove.size())?;
    for name in grove.indices() {
        if let Some(tree) = grove.tree(name) {
            writeln!(writer, "{}\t{}\t{}", name, tree.len(), tree.height())?;
        }
    }
    Ok(())
}
