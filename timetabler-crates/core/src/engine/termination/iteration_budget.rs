use super::TerminationCondition;

/// Stops the search after a fixed number of iterations of the search loop.
#[derive(Debug, Copy, Clone)]
pub struct IterationBudget {
    budget: u64,
    num_iterations: u64,
}

impl IterationBudget {
    /// The budget which is used when none is specified.
    pub const DEFAULT_BUDGET: u64 = 1_000_000;

    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_iterations: 0,
        }
    }

    pub fn num_iterations(&self) -> u64 {
        self.num_iterations
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        IterationBudget::new(IterationBudget::DEFAULT_BUDGET)
    }
}

impl TerminationCondition for IterationBudget {
    fn should_stop(&mut self) -> bool {
        self.num_iterations >= self.budget
    }

    fn iteration_has_been_performed(&mut self) {
        self.num_iterations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_exhausted_after_the_given_number_of_iterations() {
        let mut budget = IterationBudget::new(2);

        assert!(!budget.should_stop());
        budget.iteration_has_been_performed();
        assert!(!budget.should_stop());
        budget.iteration_has_been_performed();
        assert!(budget.should_stop());
    }

    #[test]
    fn zero_budget_stops_immediately() {
        assert!(IterationBudget::new(0).should_stop());
    }

    #[test]
    fn absent_condition_never_stops() {
        let mut condition: Option<IterationBudget> = None;
        condition.iteration_has_been_performed();

        assert!(!condition.should_stop());
    }
}
