//! Reading timetabling instances and writing their solutions.
//!
//! The search itself lives in [`timetabler_core`], which is re-exported by this crate. This crate
//! adds the `.tim` instance format ([`parsers::tim`]) and the solution format of the
//! `timetabler` binary ([`solution_writer`]).
pub use timetabler_core as core;
pub use timetabler_core::*;

pub mod parsers;
pub mod solution_writer;
