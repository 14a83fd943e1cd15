use super::State;
use crate::timetabler_assert_simple;
use crate::Instance;

/// The search nodes, indexed by depth.
///
/// Node `d + 1` is derived from node `d` by a single decision. Room for all `nevents + 1` slots is
/// reserved up front; a slot is filled the first time its depth is reached and reused afterwards,
/// so backtracking never frees memory.
#[derive(Debug)]
pub(crate) struct SearchStack {
    nodes: Vec<State>,
    capacity: usize,
}

impl SearchStack {
    /// Creates a stack for `instance` whose root node has not been branched on.
    pub(crate) fn new(instance: &Instance) -> Self {
        let capacity = instance.num_events() + 1;
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(State::root(instance));

        SearchStack { nodes, capacity }
    }

    pub(crate) fn node(&self, depth: usize) -> &State {
        &self.nodes[depth]
    }

    pub(crate) fn node_mut(&mut self, depth: usize) -> &mut State {
        &mut self.nodes[depth]
    }

    /// Overwrites the node at `depth + 1` with a copy of the node at `depth`, and marks it as
    /// visitable.
    pub(crate) fn branch(&mut self, depth: usize) -> &mut State {
        timetabler_assert_simple!(
            depth + 1 < self.capacity,
            "Cannot branch beyond the number of events"
        );

        if self.nodes.len() == depth + 1 {
            let child = self.nodes[depth].clone();
            self.nodes.push(child);
        } else {
            let (parents, children) = self.nodes.split_at_mut(depth + 1);
            children[0].clone_from(&parents[depth]);
        }

        let child = &mut self.nodes[depth + 1];
        child.set_visitable(true);
        child
    }

    /// Finds the deepest visitable node strictly above `depth`, [`None`] if there is none.
    pub(crate) fn backtrack(&self, depth: usize) -> Option<usize> {
        (0..depth).rev().find(|&ancestor| self.nodes[ancestor].is_visitable())
    }

    /// The number of node slots which have been filled.
    #[cfg(test)]
    pub(crate) fn num_allocated(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::EventId;
    use crate::basic_types::Timeslot;
    use crate::InstanceBuilder;

    fn instance(num_events: usize) -> Instance {
        let mut builder = InstanceBuilder::new(3, 3);
        for _ in 0..num_events {
            let _ = builder.add_unrestricted_event();
        }
        builder.build().expect("valid instance")
    }

    #[test]
    fn branching_copies_the_parent() {
        let instance = instance(2);
        let mut stack = SearchStack::new(&instance);

        let child = stack.branch(0);
        assert!(child.try_assign(&instance, EventId::new(0), Timeslot::new(2)));

        assert!(!stack.node(0).is_assigned(EventId::new(0)));
        assert!(stack.node(1).is_assigned(EventId::new(0)));
    }

    #[test]
    fn slots_are_reused_after_backtracking() {
        let instance = instance(2);
        let mut stack = SearchStack::new(&instance);
        let child = stack.branch(0);
        assert!(child.try_assign(&instance, EventId::new(0), Timeslot::new(2)));
        child.set_visitable(false);

        let child = stack.branch(0);

        assert!(child.is_visitable());
        assert!(!child.is_assigned(EventId::new(0)));
        assert_eq!(stack.num_allocated(), 2);
    }

    #[test]
    fn backtracking_skips_nodes_which_are_not_visitable() {
        let instance = instance(3);
        let mut stack = SearchStack::new(&instance);
        let _ = stack.branch(0);
        let _ = stack.branch(1);
        let _ = stack.branch(2);
        stack.node_mut(1).set_visitable(false);
        stack.node_mut(2).set_visitable(false);

        assert_eq!(stack.backtrack(3), Some(0));

        stack.node_mut(0).set_visitable(false);
        assert_eq!(stack.backtrack(3), None);
        assert_eq!(stack.backtrack(0), None);
    }
}
