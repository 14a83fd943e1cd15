/// The interface for a tie-breaker which considers additional elements with values; depending on
/// the [`Direction`] it should only consider elements with the "best" value for selection.
pub trait TieBreaker<Var, Value> {
    /// Consider the next additional element with corresponding value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the final element which was selected. After this method is called it resets the stored
    /// values such that it can be used again. This resetting is done to prevent the tie-breaker
    /// from returning an element which has a value which is out-of-date.
    fn select(&mut self) -> Option<Var>;
}

impl<Var, Value, T: TieBreaker<Var, Value> + ?Sized> TieBreaker<Var, Value> for Box<T> {
    fn consider(&mut self, variable: Var, value: Value) {
        (**self).consider(variable, value)
    }

    fn select(&mut self) -> Option<Var> {
        (**self).select()
    }
}

/// Whether the value comparison should find the maximum [`Direction::Maximum`] element or the
/// [`Direction::Minimum`] element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

impl Direction {
    /// Whether `value` is strictly better than `incumbent` in this direction.
    pub(crate) fn improves<Value: PartialOrd>(self, value: &Value, incumbent: &Value) -> bool {
        match self {
            Direction::Maximum => value > incumbent,
            Direction::Minimum => value < incumbent,
        }
    }
}
