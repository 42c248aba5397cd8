use std::fmt::Write as FmtWrite;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use genogrove_core::utils::{get_dynamic_reader, parse_bed_line};

use crate::loader::{IntervalGrove, build_grove, resolve_config};

pub fn run_intersect(matches: &ArgMatches) -> Result<()> {
    let universe_file = matches
        .get_one::<String>("universe")
        .context("A path to a universe file is required.")?;

    let query_file = matches
        .get_one::<String>("query")
        .context("A path to a query file is required.")?;

    let config = resolve_config(matches)?;
    let sorted = matches.get_flag("sorted");

    let grove = build_grove(Path::new(universe_file), config, sorted)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    process_queries(Path::new(query_file), &grove, &mut writer)?;
    writer.flush()?;

    Ok(())
}

///
/// Write every universe interval overlapping each query line as `chr\tstart\tend`.
/// Queries on chromosomes absent from the universe produce no output.
///
pub fn process_queries<W: Write>(query_file: &Path, grove: &IntervalGrove, writer: &mut W) -> Result<()> {
    let query_reader = get_dynamic_reader(query_file)?;
    let mut output_buffer = String::with_capacity(1024);

    for (line_no, line) in query_reader.lines().enumerate() {
        let line = line?;
        let Some((chr, query)) = parse_bed_line(&line)
            .with_context(|| format!("{}:{}", query_file.display(), line_no + 1))?
        else {
            continue;
        };

        for hit in grove.intersect_index(&query, chr).values() {
            output_buffer.clear();
            writeln!(&mut output_buffer, "{}\t{}\t{}", chr, hit.start, hit.end)?;
            writer.write_all(output_buffer.as_bytes())?;
        }
    }

    Ok(())
}
