use super::Direction;
use super::TieBreaker;
use crate::basic_types::Random;

/// A tie breaker which selects the element with the "best" value (according to the
/// [`Direction`]); if there is a tie then it selects any of the elements part of this tie with
/// equal probability.
///
/// The random selection proceeds as follows:
/// - If nothing has been considered yet then the provided element becomes the selected one.
/// - Otherwise, if the value of the newly provided element is strictly better (according to the
///   [`Direction`]) than the currently selected value, then the provided element becomes the
///   selected one.
/// - If the values are equal then the newly considered element is selected with probability
///   `1 / k`, where `k` is the number of elements which have been considered with this value
///   (including the new one). This is reservoir sampling with a reservoir of size one.
pub struct RandomTieBreaker<Var, Value> {
    selected_variable: Option<Var>,
    selected_value: Option<Value>,
    /// The source of randomness for choosing between elements with equal values
    rng: Box<dyn Random>,
    /// The number of elements with the current
    /// [`selected_value`][RandomTieBreaker::selected_value]
    num_variables_considered: usize,
    direction: Direction,
}

impl<Var, Value> std::fmt::Debug for RandomTieBreaker<Var, Value> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomTieBreaker")
            .field("direction", &self.direction)
            .finish()
    }
}

impl<Var, Value> RandomTieBreaker<Var, Value> {
    pub fn new(direction: Direction, rng: Box<dyn Random>) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            rng,
            num_variables_considered: 0,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
        self.num_variables_considered = 0;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for RandomTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let Some(selected_value) = self.selected_value.as_ref() else {
            self.num_variables_considered = 1;
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
            return;
        };

        if self.direction.improves(&value, selected_value) {
            self.num_variables_considered = 1;
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        } else if value == *selected_value {
            self.num_variables_considered += 1;
            if self
                .rng
                .generate_bool(1.0 / self.num_variables_considered as f64)
            {
                self.selected_variable = Some(variable);
            }
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }
}
