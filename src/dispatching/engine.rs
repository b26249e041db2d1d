//! Rule engine for ready-set selection.
//!
//! Composes a primary dispatching rule with optional tie-breakers and
//! picks one process out of a ready set. When every rule ties, the
//! candidate seen first in scan order wins, which makes the outcome
//! reproducible for a fixed scan order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier rules tie.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Spt);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SPT"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// An engine without rules treats every candidate as tied and therefore
    /// returns the first one scanned.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|rule| rule.evaluate(process)).collect()
    }

    /// Returns the index of the best candidate.
    ///
    /// `candidates` are indices into `processes`, scanned in the given
    /// order. A candidate replaces the current best only when it is
    /// strictly better, so ties keep the earliest one.
    pub fn select_best<I>(&self, processes: &[Process], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<usize> = None;
        for idx in candidates {
            let better = match best {
                None => true,
                Some(current) => {
                    self.compare(&processes[idx], &processes[current]) == Ordering::Less
                }
            };
            if better {
                best = Some(idx);
            }
        }
        best
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: u32, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(id, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_select_shortest() {
        let processes = vec![
            make_process(1, 0, 5, 0),
            make_process(2, 0, 1, 0),
            make_process(3, 0, 3, 0),
        ];
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(engine.select_best(&processes, 0..3), Some(1));
    }

    #[test]
    fn test_tie_keeps_first_scanned() {
        let processes = vec![
            make_process(1, 0, 4, 0),
            make_process(2, 0, 4, 0),
            make_process(3, 0, 4, 0),
        ];
        let engine = RuleEngine::new().with_rule(rules::Spt);

        assert_eq!(engine.select_best(&processes, 0..3), Some(0));
        // Scan order, not index value, decides ties
        assert_eq!(engine.select_best(&processes, [2, 0, 1]), Some(2));
    }

    #[test]
    fn test_tie_breaker() {
        let processes = vec![make_process(1, 0, 6, 1), make_process(2, 0, 2, 1)];
        let engine = RuleEngine::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Spt);
        assert_eq!(engine.select_best(&processes, 0..2), Some(1));
    }

    #[test]
    fn test_empty_candidates() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.select_best(&[], std::iter::empty()).is_none());
    }

    #[test]
    fn test_no_rules_returns_first() {
        let processes = vec![make_process(1, 0, 9, 0), make_process(2, 0, 1, 0)];
        assert_eq!(RuleEngine::new().select_best(&processes, 0..2), Some(0));
    }

    #[test]
    fn test_evaluate_scores() {
        let p = make_process(1, 2, 7, 3);
        let engine = RuleEngine::new()
            .with_rule(rules::Lpt)
            .with_rule(rules::Priority);
        assert_eq!(engine.evaluate(&p), vec![-7, 3]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        assert_eq!(format!("{engine:?}"), r#"RuleEngine { rules: ["FIFO"] }"#);
    }
}
