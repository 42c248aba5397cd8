use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use fxhash::FxHashMap as HashMap;
use log::info;

use genogrove_core::models::Interval;
use genogrove_core::utils::{get_dynamic_reader, parse_bed_line};
use genogrove_structure::{Grove, GroveConfig};

pub type IntervalGrove = Grove<Interval<u64>>;

///
/// Work out the grove settings: start from `--config` (or the defaults), then
/// let `--order` override the file.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<GroveConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => GroveConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load grove config: {path}"))?,
        None => GroveConfig::default(),
    };

    if let Some(order) = matches.get_one::<usize>("order") {
        config.order = *order;
    }

    Ok(config)
}

///
/// Build a grove from a BED-like file, one index per chromosome.
///
/// With `sorted`, intervals go through the sorted fast path. The file is checked
/// to be non-decreasing per chromosome first, since the grove itself does not check.
///
pub fn build_grove(path: &Path, config: GroveConfig, sorted: bool) -> Result<IntervalGrove> {
    let mut grove = Grove::from_config(config)?;
    let reader = get_dynamic_reader(path)?;

    let mut last_seen: HashMap<String, Interval<u64>> = HashMap::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((chr, interval)) = parse_bed_line(&line)
            .with_context(|| format!("{}:{}", path.display(), line_no + 1))?
        else {
            continue;
        };

        if sorted {
            if let Some(last) = last_seen.get(chr) {
                if interval < *last {
                    bail!(
                        "{}:{}: {chr}:{interval} comes after {chr}:{last}; the file is not sorted",
                        path.display(),
                        line_no + 1
                    );
                }
            }
            last_seen.insert(chr.to_string(), interval);
            grove.insert_sorted(chr, interval);
        } else {
            grove.insert(chr, interval);
        }
    }

    info!(
        "loaded {} intervals into {} indices from {}",
        grove.size(),
        grove.indices().count(),
        path.display()
    );

    Ok(grove)
}
