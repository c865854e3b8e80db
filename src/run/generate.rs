//! Test-data generation mode implementation.

use std::path::Path;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordchain::config::Config;
use wordchain::testdata::{self, SizeClass};

/// Write `generate_count` documents of one size class under `data_dir`.
pub fn run_generate(size: SizeClass, seed: Option<u64>, config: &Config) -> anyhow::Result<()> {
    let data_dir = config.get_string("data_dir").unwrap_or("testdata");
    let count = config.get_usize("generate_count").unwrap_or(10);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let paths = testdata::generate_files(Path::new(data_dir), size, count, &mut rng)
        .with_context(|| format!("Failed to generate {} documents in {}", size, data_dir))?;

    for path in paths {
        println!("Generated {}", path.display());
    }
    Ok(())
}
