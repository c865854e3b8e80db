// wordchain configuration
// Edit this file to change the defaults the runners start from; command-line
// flags override anything set here.

use crate::config::Config;
use crate::core::spell::DEFAULT_DICTIONARY;

/// Install default settings
pub fn configure(config: &mut Config) {
    // Word list used for misspelling counts
    config.set("dictionary", DEFAULT_DICTIONARY);

    // Where generated test documents live
    config.set("data_dir", "testdata");

    // Benchmark
    config.set("iterations", 1000i64);
    config.set("cut_paste_range", 3i64);
    // The reference editor addresses characters, not words
    config.set("reference_range_factor", 5i64);
    // 0 = every case file found
    config.set("cases", 0i64);

    // "from-head" or "nearest"
    config.set("cursor", "from-head");

    // Generator
    config.set("generate_count", 10i64);
}
