//! Benchmark results and side-by-side comparison

use std::fmt;
use std::time::Duration;

/// Operation families timed by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    CutPaste,
    CopyPaste,
    GetText,
    Misspellings,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::CutPaste,
        Family::CopyPaste,
        Family::GetText,
        Family::Misspellings,
    ];

    fn index(self) -> usize {
        match self {
            Family::CutPaste => 0,
            Family::CopyPaste => 1,
            Family::GetText => 2,
            Family::Misspellings => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Family::CutPaste => "cut paste",
            Family::CopyPaste => "copy paste",
            Family::GetText => "text retrieval",
            Family::Misspellings => "misspelling",
        }
    }
}

/// Per-family timings for one editor, averaged over cases
#[derive(Debug, Clone, Default)]
pub struct BenchReport {
    pub editor: &'static str,
    pub cases: usize,
    pub iterations: usize,
    totals: [Duration; 4],
}

impl BenchReport {
    pub(crate) fn add(&mut self, family: Family, elapsed: Duration) {
        self.totals[family.index()] += elapsed;
    }

    pub(crate) fn finish(&mut self, cases: usize, iterations: usize) {
        self.cases = cases;
        self.iterations = iterations;
    }

    /// Mean time for `iterations` operations of one family on one case
    pub fn average(&self, family: Family) -> Duration {
        match u32::try_from(self.cases) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(cases) => self.totals[family.index()] / cases,
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} editor, {} case(s), {} iterations each:",
            self.editor, self.cases, self.iterations
        )?;
        for family in Family::ALL {
            writeln!(
                f,
                "  {:<15} {:>12.5} s",
                family.label(),
                self.average(family).as_secs_f64()
            )?;
        }
        Ok(())
    }
}

/// Relative speed of two reports, family by family
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub first: &'a BenchReport,
    pub second: &'a BenchReport,
}

impl<'a> Comparison<'a> {
    pub fn new(first: &'a BenchReport, second: &'a BenchReport) -> Self {
        Self { first, second }
    }

    /// Faster report for a family and how much faster it is, in percent of
    /// its own time. Ties go to the second report.
    pub fn winner(&self, family: Family) -> (&'a BenchReport, f64) {
        let a = self.first.average(family).as_secs_f64();
        let b = self.second.average(family).as_secs_f64();
        if a < b {
            (self.first, speedup(b, a))
        } else {
            (self.second, speedup(a, b))
        }
    }
}

fn speedup(slower: f64, faster: f64) -> f64 {
    if faster == 0.0 {
        return 0.0;
    }
    ((slower - faster) / faster * 100.0 * 100.0).round() / 100.0
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        for family in Family::ALL {
            let (winner, percent) = self.winner(family);
            let loser = if std::ptr::eq(winner, self.first) {
                self.second
            } else {
                self.first
            };
            writeln!(
                f,
                "{} time is faster in {} editor by {}% ({:.5}s vs {:.5}s)",
                family.label(),
                winner.editor,
                percent,
                loser.average(family).as_secs_f64(),
                winner.average(family).as_secs_f64()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(editor: &'static str, millis: [u64; 4]) -> BenchReport {
        let mut report = BenchReport {
            editor,
            ..BenchReport::default()
        };
        for (family, ms) in Family::ALL.into_iter().zip(millis) {
            report.add(family, Duration::from_millis(ms));
        }
        report.finish(1, 100);
        report
    }

    #[test]
    fn test_average_over_cases() {
        let mut r = BenchReport::default();
        r.add(Family::GetText, Duration::from_millis(30));
        r.add(Family::GetText, Duration::from_millis(10));
        r.finish(2, 5);
        assert_eq!(r.average(Family::GetText), Duration::from_millis(20));
        assert_eq!(r.average(Family::CutPaste), Duration::ZERO);
    }

    #[test]
    fn test_comparison_winner() {
        let slow = report("reference", [300, 200, 10, 50]);
        let fast = report("word-chain", [100, 100, 20, 50]);
        let cmp = Comparison::new(&slow, &fast);

        let (winner, pct) = cmp.winner(Family::CutPaste);
        assert_eq!(winner.editor, "word-chain");
        assert_eq!(pct, 200.0);

        let (winner, pct) = cmp.winner(Family::GetText);
        assert_eq!(winner.editor, "reference");
        assert_eq!(pct, 100.0);

        let text = cmp.to_string();
        assert!(text.contains("cut paste time is faster in word-chain editor by 200%"));
    }
}
