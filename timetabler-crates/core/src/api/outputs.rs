use crate::basic_types::Solution;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::TimetableSolver;

/// The result of a call to [`TimetableSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A timetable which satisfies every hard constraint was found.
    Satisfiable(Solution),
    /// No timetable was found; the reason tells which way the search ended.
    NotFound(NotFoundReason),
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Satisfiable(solution) => Some(solution),
            SearchResult::NotFound(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchResult::Satisfiable(solution) => Some(solution),
            SearchResult::NotFound(_) => None,
        }
    }
}

/// Why the search stopped without a timetable.
///
/// Only [`NotFoundReason::SearchSpaceExhausted`] shows that the instance has no timetable; the
/// heuristics merely decide the order in which the candidates are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The [`TerminationCondition`] stopped the search.
    BudgetExhausted,
    /// Every node on the search stack ran out of candidates to try.
    SearchSpaceExhausted,
}
