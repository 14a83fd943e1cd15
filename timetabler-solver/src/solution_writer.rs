//! Writes a [`Solution`] as one `timeslot room` line per event, in the order of the events.
use std::io::Write;

use timetabler_core::results::Solution;

pub fn write_solution(solution: &Solution, mut sink: impl Write) -> std::io::Result<()> {
    for (_, timeslot, room) in solution.iter() {
        writeln!(sink, "{} {}", timeslot.id, room.id)?;
    }
    sink.flush()
}
