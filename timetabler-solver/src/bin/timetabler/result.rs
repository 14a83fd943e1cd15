use thiserror::Error;
use timetabler_solver::options::CapacityError;
use timetabler_solver::parsers::tim::TimParseError;

pub(crate) type TimetablerResult<T> = Result<T, TimetablerError>;

#[derive(Error, Debug)]
pub(crate) enum TimetablerError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file was invalid, more details: {0}")]
    InvalidInstance(#[from] TimParseError),
    #[error("The instance is too large for the solver, more details: {0}")]
    Capacity(#[from] CapacityError),
}
