//! Benchmark harness: runs each strategy end to end and reports timings.
//!
//! Per strategy the phases are Start (timestamp + notice), Prepare (sort
//! or index build; the linear strategy skips it), Search, Report. The
//! strategies run strictly one after another and share nothing: every
//! run re-reads both sources into private copies.

use std::time::{Duration, Instant};

use crate::errors::BenchError;
use crate::index::{build_index, count_keys};
use crate::record::Record;
use crate::search::{binary_search, count_matches, count_substring_matches, jump_search};
use crate::sort::{bubble_sort, quick_sort};
use crate::source::LineSource;
use crate::strategy::Strategy;

/// Structured outcome of one strategy run, for the output collaborator
/// to render however it likes.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    /// Targets found.
    pub found: usize,
    /// Targets looked up.
    pub total: usize,
    /// Wall-clock time of the whole run, from the Start timestamp.
    pub elapsed: Duration,
    /// Sort or index-build time; `None` for the linear strategy.
    pub prepare: Option<Duration>,
    /// Search-loop time; `None` for the linear strategy, which reports
    /// only its total.
    pub search: Option<Duration>,
}

impl StrategyReport {
    /// Match ratio in the `<found>/<total>` form the reports use.
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.found, self.total)
    }
}

/// Output collaborator fed by the harness as strategies run.
pub trait ReportSink {
    /// A strategy entered its Start phase.
    fn strategy_started(&mut self, strategy: Strategy);
    /// A strategy finished; `report` is its terminal state.
    fn strategy_finished(&mut self, report: &StrategyReport);
}

/// Sink that discards everything. Handy for benches and tests that only
/// want the returned reports.
pub struct NullSink;

impl ReportSink for NullSink {
    fn strategy_started(&mut self, _strategy: Strategy) {}
    fn strategy_finished(&mut self, _report: &StrategyReport) {}
}

/// Run all four strategies in the fixed order.
///
/// Both sources are checked once up front; an unavailable source aborts
/// the whole run before any strategy executes.
pub fn run_all(
    phonebook: &dyn LineSource,
    queries: &dyn LineSource,
    sink: &mut dyn ReportSink,
) -> Result<Vec<StrategyReport>, BenchError> {
    phonebook.ensure_available()?;
    queries.ensure_available()?;

    Strategy::ALL
        .iter()
        .map(|&strategy| run_strategy(strategy, phonebook, queries, sink))
        .collect()
}

/// Run a single strategy end to end.
pub fn run_strategy(
    strategy: Strategy,
    phonebook: &dyn LineSource,
    queries: &dyn LineSource,
    sink: &mut dyn ReportSink,
) -> Result<StrategyReport, BenchError> {
    sink.strategy_started(strategy);
    let start = Instant::now();

    let report = match strategy {
        Strategy::Linear => {
            let lines = phonebook.lines()?;
            let targets = queries.lines()?;
            let (found, _) = count_substring_matches(&targets, &lines);
            StrategyReport {
                strategy,
                found,
                total: targets.len(),
                elapsed: start.elapsed(),
                prepare: None,
                search: None,
            }
        }
        Strategy::BubbleJump => {
            let records = load_records(phonebook)?;
            let (sorted, prepare) = bubble_sort(records);
            let targets = queries.lines()?;
            let (found, search) = count_matches(&targets, &sorted, jump_search);
            StrategyReport {
                strategy,
                found,
                total: targets.len(),
                elapsed: start.elapsed(),
                prepare: Some(prepare),
                search: Some(search),
            }
        }
        Strategy::QuickBinary => {
            let records = load_records(phonebook)?;
            let (sorted, prepare) = quick_sort(records);
            let targets = queries.lines()?;
            let (found, search) = count_matches(&targets, &sorted, binary_search);
            StrategyReport {
                strategy,
                found,
                total: targets.len(),
                elapsed: start.elapsed(),
                prepare: Some(prepare),
                search: Some(search),
            }
        }
        Strategy::HashTable => {
            let lines = phonebook.lines()?;
            let (index, prepare) = build_index(&lines);
            let targets = queries.lines()?;
            let (found, search) = count_keys(&targets, &index);
            StrategyReport {
                strategy,
                found,
                total: targets.len(),
                elapsed: start.elapsed(),
                prepare: Some(prepare),
                search: Some(search),
            }
        }
    };

    sink.strategy_finished(&report);
    Ok(report)
}

fn load_records(source: &dyn LineSource) -> Result<Vec<Record>, BenchError> {
    Ok(source.lines()?.iter().map(|l| Record::parse(l)).collect())
}
