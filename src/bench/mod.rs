//! Benchmark harness
//!
//! Times the four operation families on any `TextEditor`. Every family gets a
//! freshly built editor per case so one family's edits never skew another.
//!
//! Cut and copy rounds select `[1, cut_paste_range)`, so a range of 3 moves
//! two words per round.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::TextEditor;
use crate::core::error::Result;

pub mod report;

pub use report::{BenchReport, Comparison, Family};

#[derive(Debug, Clone)]
pub struct Benchmarker {
    cases: Vec<String>,
    iterations: usize,
    /// Exclusive end of the `[1, end)` range cut or copied each round
    cut_paste_range: usize,
}

impl Benchmarker {
    pub fn new(cases: Vec<String>, iterations: usize, cut_paste_range: usize) -> Self {
        Self {
            cases,
            iterations,
            cut_paste_range,
        }
    }

    /// Same cases and iterations with a different range length
    pub fn with_range(&self, cut_paste_range: usize) -> Self {
        Self {
            cut_paste_range,
            ..self.clone()
        }
    }

    /// Run every family over every case and average per family.
    pub fn run<E, F>(&self, make_editor: F) -> Result<BenchReport>
    where
        E: TextEditor,
        F: Fn(&str) -> E,
    {
        let mut report = BenchReport::default();
        if self.cases.is_empty() {
            return Ok(report);
        }

        for (index, case) in self.cases.iter().enumerate() {
            let mut name = "";
            for family in Family::ALL {
                let mut editor = make_editor(case);
                name = editor.name();
                let elapsed = self.time_family(&mut editor, family)?;
                debug!(
                    editor = name,
                    case = index,
                    chars = case.len(),
                    ?family,
                    ?elapsed,
                    "timed family"
                );
                report.add(family, elapsed);
            }
            info!(
                editor = name,
                case = index,
                chars = case.len(),
                "evaluated case"
            );
            report.editor = name;
        }

        report.finish(self.cases.len(), self.iterations);
        Ok(report)
    }

    fn time_family<E: TextEditor>(&self, editor: &mut E, family: Family) -> Result<Duration> {
        let end = self.cut_paste_range;
        let start = Instant::now();
        match family {
            Family::CutPaste => {
                for n in 0..self.iterations {
                    if n % 2 == 0 {
                        editor.cut(1, end);
                    } else {
                        editor.paste(2)?;
                    }
                }
            }
            Family::CopyPaste => {
                for n in 0..self.iterations {
                    if n % 2 == 0 {
                        editor.copy(1, end);
                    } else {
                        editor.paste(2)?;
                    }
                }
            }
            Family::GetText => {
                for _ in 0..self.iterations {
                    std::hint::black_box(editor.text());
                }
            }
            Family::Misspellings => {
                for _ in 0..self.iterations {
                    std::hint::black_box(editor.misspellings());
                }
            }
        }
        Ok(start.elapsed())
    }
}
