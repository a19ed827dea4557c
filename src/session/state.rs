use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::predictor::Advisory;
use crate::session::stats::AggregateStats;
use crate::wheel::SpinOutcome;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisPhase {
    Idle,
    Analyzing,
}

impl Default for AnalysisPhase {
    fn default() -> Self {
        AnalysisPhase::Idle
    }
}

/// Everything the frontend needs to render one frame of the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub history: Vec<SpinOutcome>,
    pub last_outcome: Option<SpinOutcome>,
    pub stats: AggregateStats,
    pub advisory: Option<Advisory>,
    pub analysis: AnalysisPhase,
    /// Outcomes still needed before the predictor can run; drives the
    /// "waiting for N more data points" message.
    pub spins_until_ready: usize,
}

/// Work order for one analysis run: the generation at request time plus
/// the history snapshot it must be computed over.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub history: Vec<SpinOutcome>,
}

/// The single owned session store. History is newest-first and
/// prepend-only; `generation` increases on every history mutation, and
/// analysis results are applied only while their generation still
/// matches, so a late-resolving analysis can never overwrite a fresher
/// advisory.
#[derive(Debug)]
pub struct SessionState {
    history: VecDeque<SpinOutcome>,
    last_outcome: Option<SpinOutcome>,
    advisory: Option<Advisory>,
    phase: AnalysisPhase,
    generation: u64,
    min_history: usize,
}

impl SessionState {
    pub fn new(min_history: usize) -> Self {
        Self {
            history: VecDeque::new(),
            last_outcome: None,
            advisory: None,
            phase: AnalysisPhase::Idle,
            generation: 0,
            min_history,
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn ready_for_analysis(&self) -> bool {
        self.history.len() >= self.min_history
    }

    pub fn spins_until_ready(&self) -> usize {
        self.min_history.saturating_sub(self.history.len())
    }

    /// Prepend one outcome. Invalidates any in-flight analysis.
    pub fn record(&mut self, outcome: SpinOutcome) {
        self.last_outcome = Some(outcome.clone());
        self.history.push_front(outcome);
        self.generation += 1;
    }

    /// Reset history, last outcome, advisory, and phase in one step.
    pub fn clear(&mut self) {
        self.history.clear();
        self.last_outcome = None;
        self.advisory = None;
        self.phase = AnalysisPhase::Idle;
        self.generation += 1;
    }

    /// Mark an analysis as in flight and hand out its work order.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.phase = AnalysisPhase::Analyzing;
        AnalysisTicket {
            generation: self.generation,
            history: self.history_vec(),
        }
    }

    /// Apply a finished analysis. Returns false (and changes nothing)
    /// when the history has moved on since the ticket was issued.
    pub fn complete_analysis(&mut self, generation: u64, advisory: Advisory) -> bool {
        if generation != self.generation {
            return false;
        }
        self.advisory = Some(advisory);
        self.phase = AnalysisPhase::Idle;
        true
    }

    /// Apply an analysis failure: the fixed engine-error advisory, same
    /// staleness rule as `complete_analysis`. History is untouched.
    pub fn fail_analysis(&mut self, generation: u64) -> bool {
        self.complete_analysis(generation, Advisory::engine_error())
    }

    pub fn history_vec(&self) -> Vec<SpinOutcome> {
        self.history.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            history: self.history_vec(),
            last_outcome: self.last_outcome.clone(),
            stats: AggregateStats::from_history(&self.history),
            advisory: self.advisory.clone(),
            analysis: self.phase,
            spins_until_ready: self.spins_until_ready(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{predict, PredictorConfig};

    fn outcome(value: u32) -> SpinOutcome {
        SpinOutcome::from_value(value).unwrap()
    }

    fn state_with(values: &[u32]) -> SessionState {
        let mut state = SessionState::new(3);
        for &value in values {
            state.record(outcome(value));
        }
        state
    }

    #[test]
    fn record_prepends_and_grows_by_one() {
        let mut state = SessionState::new(3);
        let first = outcome(4);
        let second = outcome(9);
        state.record(first.clone());
        state.record(second.clone());

        let history = state.history_vec();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], second);
        assert_eq!(history[1], first);
        assert_eq!(state.snapshot().last_outcome, Some(second));
        // Every mutation bumps the generation.
        assert_eq!(state.generation(), 2);
        assert!(!state.is_empty());
    }

    #[test]
    fn analysis_waits_for_three_outcomes() {
        let mut state = SessionState::new(3);
        assert!(!state.ready_for_analysis());
        assert_eq!(state.spins_until_ready(), 3);
        state.record(outcome(1));
        state.record(outcome(2));
        assert!(!state.ready_for_analysis());
        assert_eq!(state.spins_until_ready(), 1);
        state.record(outcome(3));
        assert!(state.ready_for_analysis());
        assert_eq!(state.spins_until_ready(), 0);
    }

    #[test]
    fn stale_analysis_results_are_discarded() {
        let config = PredictorConfig::default();
        let mut state = state_with(&[1, 2, 3]);

        // First analysis is requested, then the history moves on and a
        // second one is requested over the newer snapshot.
        let older = state.begin_analysis();
        state.record(outcome(0));
        let newer = state.begin_analysis();

        let newer_advisory = predict(&newer.history, &config).unwrap();
        let older_advisory = predict(&older.history, &config).unwrap();
        assert_ne!(newer_advisory, older_advisory);

        // The newer request resolves first; the older one resolves late
        // and must not overwrite it.
        assert!(state.complete_analysis(newer.generation, newer_advisory.clone()));
        assert_eq!(state.phase(), AnalysisPhase::Idle);
        assert!(!state.complete_analysis(older.generation, older_advisory));
        assert_eq!(state.advisory(), Some(&newer_advisory));
    }

    #[test]
    fn late_failure_of_a_stale_analysis_changes_nothing() {
        let config = PredictorConfig::default();
        let mut state = state_with(&[5, 8, 5]);

        let older = state.begin_analysis();
        state.record(outcome(8));
        let newer = state.begin_analysis();
        let advisory = predict(&newer.history, &config).unwrap();

        assert!(state.complete_analysis(newer.generation, advisory.clone()));
        assert!(!state.fail_analysis(older.generation));
        assert_eq!(state.advisory(), Some(&advisory));
    }

    #[test]
    fn current_failure_surfaces_the_engine_error_advisory() {
        let mut state = state_with(&[5, 8, 5]);
        let ticket = state.begin_analysis();
        assert!(state.fail_analysis(ticket.generation));
        assert_eq!(state.advisory(), Some(&Advisory::engine_error()));
        assert_eq!(state.phase(), AnalysisPhase::Idle);
        // History is never touched by a failed analysis.
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn clear_resets_everything_at_once() {
        let mut state = state_with(&[1, 2, 3]);
        let ticket = state.begin_analysis();
        assert!(state.complete_analysis(
            ticket.generation,
            predict(&ticket.history, &PredictorConfig::default()).unwrap()
        ));

        state.clear();
        let snapshot = state.snapshot();
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.last_outcome, None);
        assert_eq!(snapshot.advisory, None);
        assert_eq!(snapshot.analysis, AnalysisPhase::Idle);
        assert_eq!(snapshot.stats, AggregateStats::default());
        assert_eq!(snapshot.spins_until_ready, 3);
    }

    #[test]
    fn clear_invalidates_in_flight_analyses() {
        let mut state = state_with(&[1, 2, 3]);
        let ticket = state.begin_analysis();
        state.clear();
        assert!(!state.complete_analysis(
            ticket.generation,
            predict(&ticket.history, &PredictorConfig::default()).unwrap()
        ));
        assert_eq!(state.advisory(), None);
    }

    #[test]
    fn snapshot_stats_match_the_recorded_colors() {
        let state = state_with(&[1, 2, 0]);
        let stats = state.snapshot().stats;
        assert_eq!(stats.red_count, 1);
        assert_eq!(stats.black_count, 1);
        assert_eq!(stats.green_count, 1);
        assert_eq!(stats.total_spins, 3);
    }
}
