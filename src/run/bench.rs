//! Benchmark mode implementation.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::info;
use wordchain::bench::{Benchmarker, Comparison};
use wordchain::config::Config;
use wordchain::core::cursor::CursorStrategy;
use wordchain::core::{ReferenceEditor, WordEditor};
use wordchain::testdata::{self, SizeClass};

use super::load_dictionary;

/// Run both editors over the cases of one size class and print the results.
pub fn run_bench(size: SizeClass, config: &Config) -> anyhow::Result<()> {
    let dictionary = load_dictionary(config)?;

    let data_dir = config.get_string("data_dir").unwrap_or("testdata");
    let limit = config.get_usize("cases").filter(|&n| n > 0);
    let cases = testdata::load_cases(Path::new(data_dir), size, limit)
        .with_context(|| format!("Failed to load {} cases from {}", size, data_dir))?;
    if cases.is_empty() {
        bail!(
            "No {} test documents in {}. Run `wordchain generate --size {}` first.",
            size,
            data_dir,
            size
        );
    }

    let iterations = config.get_usize("iterations").unwrap_or(1000);
    let range = config.get_usize("cut_paste_range").unwrap_or(3);
    let factor = config.get_usize("reference_range_factor").unwrap_or(5);
    let strategy: CursorStrategy = config
        .get_string("cursor")
        .unwrap_or("from-head")
        .parse()
        .map_err(anyhow::Error::msg)?;

    info!(
        cases = cases.len(),
        %size,
        iterations,
        range,
        ?strategy,
        "starting benchmark"
    );

    let bench = Benchmarker::new(cases, iterations, range);

    let reference = bench
        .with_range(range * factor)
        .run(|doc| ReferenceEditor::new(doc, Arc::clone(&dictionary)))?;
    println!("{}", reference);

    let word_chain = bench.run(|doc| WordEditor::with_cursor(doc, Arc::clone(&dictionary), strategy))?;
    println!("{}", word_chain);

    print!("{}", Comparison::new(&reference, &word_chain));
    Ok(())
}
