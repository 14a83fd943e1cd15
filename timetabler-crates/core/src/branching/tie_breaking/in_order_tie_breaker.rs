use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first element that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two events
/// `e1` with value 5 and `e2` with value 5, if the tie-breaker first receives `e2` and then `e1`
/// then it will return `e2` because it was the first event with the minimum value (of 5 in this
/// example) which was provided.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected element, could be [None] if nothing has been considered yet
    selected_variable: Option<Var>,
    /// The selected value, could be [None] if nothing has been considered yet
    selected_value: Option<Value>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match self.selected_value.as_ref() {
            Some(selected_value) => self.direction.improves(&value, selected_value),
            None => true,
        };

        if is_better {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::EventId;

    #[test]
    fn test_selection_first_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(EventId::new(0), 10);
        breaker.consider(EventId::new(1), 10);
        breaker.consider(EventId::new(2), 10);

        assert_eq!(breaker.select(), Some(EventId::new(0)));
    }

    #[test]
    fn test_selection_new_minimum() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(EventId::new(0), 10);
        breaker.consider(EventId::new(1), 5);
        breaker.consider(EventId::new(2), 5);

        assert_eq!(breaker.select(), Some(EventId::new(1)));
    }

    #[test]
    fn test_selection_new_maximum() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(EventId::new(0), 5);
        breaker.consider(EventId::new(1), 10);
        breaker.consider(EventId::new(2), 1);

        assert_eq!(breaker.select(), Some(EventId::new(1)));
    }

    #[test]
    fn test_select_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);
        breaker.consider(EventId::new(0), 5);
        let _ = breaker.select();

        assert_eq!(breaker.select(), None);
    }
}
