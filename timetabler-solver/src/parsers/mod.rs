//! Readers for the instance formats which are accepted by the solver.
pub mod tim;
