use log::debug;
use log::trace;
use log::warn;

use super::state::EmptyDomain;
use super::SearchStack;
use super::SearchStatistics;
use crate::branching::EventSelector;
use crate::branching::SelectionContext;
use crate::branching::TimeslotSelector;
use crate::containers::StorageKey;
use crate::engine::termination::TerminationCondition;
use crate::results::NotFoundReason;
use crate::results::SearchResult;
use crate::Instance;

/// Runs the iterative backtracking search over the nodes of a fresh [`SearchStack`].
///
/// Every iteration selects an event and a timeslot at the current depth, copies the node to the
/// next depth, removes the timeslot from the event's domain in the parent, and then places the
/// event in the copy. A failed room placement or a wiped out domain sends the search back to the
/// deepest node which still has candidates left to try. A selection which is not a candidate of
/// the current node is treated as a dead end.
pub(crate) fn search(
    instance: &Instance,
    event_selector: &mut dyn EventSelector,
    timeslot_selector: &mut dyn TimeslotSelector,
    termination: &mut impl TerminationCondition,
    statistics: &mut SearchStatistics,
) -> SearchResult {
    let num_events = instance.num_events();
    let mut stack = SearchStack::new(instance);
    let mut depth = 0;

    loop {
        if depth == num_events {
            let solution = stack
                .node(depth)
                .solution()
                .expect("every event is assigned and placed at full depth");
            debug!(
                "Found a timetable after {} iterations",
                statistics.num_iterations
            );
            return SearchResult::Satisfiable(solution);
        }

        if termination.should_stop() {
            debug!(
                "Iteration budget exhausted at depth {depth} after {} iterations",
                statistics.num_iterations
            );
            return SearchResult::NotFound(NotFoundReason::BudgetExhausted);
        }
        termination.iteration_has_been_performed();
        statistics.num_iterations += 1;

        let context = SelectionContext::new(instance, stack.node(depth));
        let decision = event_selector.select_event(&context).and_then(|event| {
            timeslot_selector
                .select_timeslot(&context, event)
                .map(|timeslot| (event, timeslot))
        });
        let decision = decision.filter(|&(event, timeslot)| {
            let node = stack.node(depth);
            let is_candidate = event.index() < num_events
                && !node.is_assigned(event)
                && node.domain(event).contains(timeslot);
            if !is_candidate {
                warn!("Depth {depth}: {timeslot} is not a candidate for {event}");
            }
            is_candidate
        });

        let Some((event, timeslot)) = decision else {
            // No usable selection is left, nothing below this node can succeed.
            stack.node_mut(depth).set_visitable(false);
            match backtrack(&stack, depth, statistics) {
                Some(ancestor) => {
                    depth = ancestor;
                    continue;
                }
                None => return exhausted(statistics),
            }
        };

        statistics.num_decisions += 1;
        trace!("Depth {depth}: trying {event} in {timeslot}");

        let _ = stack.branch(depth);
        let parent = stack.node_mut(depth);
        let _ = parent.discard(event, timeslot);
        if parent.domain(event).is_empty() {
            parent.set_visitable(false);
        }

        let child = stack.node_mut(depth + 1);
        let status = if child.try_assign(instance, event, timeslot) {
            child.propagate(instance, event, timeslot)
        } else {
            statistics.num_room_infeasibilities += 1;
            trace!("No room is left for {event} in {timeslot}");
            Err(EmptyDomain(event))
        };

        if let Err(EmptyDomain(wiped_out)) = status {
            if wiped_out != event {
                statistics.num_domain_wipeouts += 1;
                trace!("Placing {event} in {timeslot} leaves no candidates for {wiped_out}");
            }
            match backtrack(&stack, depth + 1, statistics) {
                Some(ancestor) => {
                    depth = ancestor;
                    continue;
                }
                None => return exhausted(statistics),
            }
        }

        depth += 1;
        if depth > statistics.peak_depth {
            statistics.peak_depth = depth;
            debug!("Reached depth {depth} of {num_events}");
        }
    }
}

/// Moves from the failed node at `depth` to the deepest visitable ancestor, counting the
/// backtrack at the depth it lands on.
fn backtrack(
    stack: &SearchStack,
    depth: usize,
    statistics: &mut SearchStatistics,
) -> Option<usize> {
    statistics.num_backtracks += 1;

    let ancestor = stack.backtrack(depth);
    trace!("Backtracking from depth {depth} to {ancestor:?}");
    if let Some(ancestor) = ancestor {
        statistics.backtracks_per_level.increment(ancestor);
    }
    ancestor
}

fn exhausted(statistics: &SearchStatistics) -> SearchResult {
    debug!(
        "No node is left to explore after {} iterations",
        statistics.num_iterations
    );
    SearchResult::NotFound(NotFoundReason::SearchSpaceExhausted)
}
