//! A parser for timetabling instances in the whitespace-separated `.tim` format of the
//! International Timetabling Competition, optionally extended with timeslot availability and
//! precedence sections.
//!
//! The file consists of the following sections, in order:
//! 1. `nevents nrooms nfeatures nstudents`
//! 2. the size of every room
//! 3. for every student and every event, whether the student attends the event
//! 4. for every room and every feature, whether the room has the feature
//! 5. for every event and every feature, whether the event requires the feature
//! 6. (optional) for every event and every timeslot, whether the event can take place in it
//! 7. (optional) for every pair of events `(e1, e2)`, whether `e1` takes place before `e2`
//!
//! All flags are `0` or `1`. Events attended by the same student conflict, and an event can only
//! use rooms which have all of its required features and which are large enough to seat all of
//! its students.
use std::io::Read;
use std::str::SplitWhitespace;

use thiserror::Error;
use timetabler_core::EventId;
use timetabler_core::Instance;
use timetabler_core::InstanceBuilder;
use timetabler_core::InstanceError;
use timetabler_core::RoomId;
use timetabler_core::Timeslot;
use timetabler_core::MAX_NUM_TIMESLOTS;

/// The number of timeslots of a competition instance: 5 days of 9 timeslots.
pub const DEFAULT_NUM_TIMESLOTS: usize = 45;

/// The largest number of events, rooms, features or students which the header may declare.
pub const MAX_HEADER_COUNT: usize = 100_000;

#[derive(Error, Debug)]
pub enum TimParseError {
    #[error("failed to read instance")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEndOfInput(&'static str),

    #[error("'{token}' is not a valid {section} value")]
    InvalidNumber {
        token: String,
        section: &'static str,
    },

    #[error("expected a 0/1 flag in {section}, but found {value}")]
    InvalidFlag { value: u64, section: &'static str },

    #[error("the header declares {count} {item}, but at most {MAX_HEADER_COUNT} are supported")]
    HeaderTooLarge { item: &'static str, count: usize },

    #[error("the header requires {required} more values, but only {available} remain")]
    MissingSections { required: usize, available: usize },

    #[error("unexpected token '{0}' after the last section")]
    TrailingInput(String),

    #[error("the instance is invalid: {0}")]
    InvalidInstance(#[from] InstanceError),
}

/// Reads an [`Instance`] with `num_timeslots` timeslots from `source`.
pub fn parse_tim(mut source: impl Read, num_timeslots: usize) -> Result<Instance, TimParseError> {
    let mut contents = String::new();
    let _ = source.read_to_string(&mut contents)?;
    parse_tim_str(&contents, num_timeslots)
}

/// Reads an [`Instance`] with `num_timeslots` timeslots from the contents of a `.tim` file.
pub fn parse_tim_str(contents: &str, num_timeslots: usize) -> Result<Instance, TimParseError> {
    if num_timeslots > MAX_NUM_TIMESLOTS {
        return Err(InstanceError::UnsupportedNumberOfTimeslots(num_timeslots).into());
    }

    let mut tokens = Tokens::new(contents);

    let num_events = tokens.next_count("events")?;
    let num_rooms = tokens.next_count("rooms")?;
    let num_features = tokens.next_count("features")?;
    let num_students = tokens.next_count("students")?;

    // Nothing is allocated before the input is known to hold every mandatory section.
    let required = [
        Some(num_rooms),
        num_students.checked_mul(num_events),
        num_rooms.checked_mul(num_features),
        num_events.checked_mul(num_features),
    ]
    .into_iter()
    .try_fold(0_usize, |total, section| total.checked_add(section?))
    .unwrap_or(usize::MAX);
    if required > tokens.remaining() {
        return Err(TimParseError::MissingSections {
            required,
            available: tokens.remaining(),
        });
    }

    let room_sizes = (0..num_rooms)
        .map(|_| tokens.next_number("the room sizes"))
        .collect::<Result<Vec<_>, _>>()?;

    let mut attendance = vec![0; num_events];
    let mut conflicts = Vec::new();
    for _ in 0..num_students {
        let mut attended = Vec::new();
        for (event, count) in attendance.iter_mut().enumerate() {
            if tokens.next_flag("the student attendance")? {
                *count += 1;
                attended.push(EventId::new(event as u32));
            }
        }
        for (index, &first) in attended.iter().enumerate() {
            conflicts.extend(attended[index + 1..].iter().map(|&second| (first, second)));
        }
    }

    let mut room_features = vec![vec![false; num_features]; num_rooms];
    for features in room_features.iter_mut() {
        for has_feature in features.iter_mut() {
            *has_feature = tokens.next_flag("the room features")?;
        }
    }

    let mut candidate_rooms = Vec::with_capacity(num_events);
    for &num_attendees in &attendance {
        let mut required = Vec::new();
        for feature in 0..num_features {
            if tokens.next_flag("the event features")? {
                required.push(feature);
            }
        }

        let rooms = (0..num_rooms)
            .filter(|&room| required.iter().all(|&feature| room_features[room][feature]))
            .filter(|&room| room_sizes[room] >= num_attendees)
            .map(|room| RoomId::new(room as u32))
            .collect::<Vec<_>>();
        candidate_rooms.push(rooms);
    }

    let mut candidate_timeslots =
        vec![(0..num_timeslots as u32).map(Timeslot::new).collect::<Vec<_>>(); num_events];
    if !tokens.is_exhausted() {
        for timeslots in candidate_timeslots.iter_mut() {
            let mut available = Vec::with_capacity(num_timeslots);
            for timeslot in timeslots.iter() {
                if tokens.next_flag("the timeslot availability")? {
                    available.push(*timeslot);
                }
            }
            *timeslots = available;
        }
    }

    let mut precedences = Vec::new();
    if !tokens.is_exhausted() {
        for before in 0..num_events {
            for after in 0..num_events {
                if tokens.next_flag("the precedences")? {
                    precedences.push((EventId::new(before as u32), EventId::new(after as u32)));
                }
            }
        }
    }

    if let Some(token) = tokens.next() {
        return Err(TimParseError::TrailingInput(token.to_owned()));
    }

    let mut builder = InstanceBuilder::new(num_timeslots, num_rooms);
    for (timeslots, rooms) in candidate_timeslots.into_iter().zip(candidate_rooms) {
        let _ = builder.add_event(timeslots, rooms);
    }
    for (first, second) in conflicts {
        builder.add_conflict(first, second);
    }
    for (before, after) in precedences {
        builder.add_precedence(before, after);
    }

    Ok(builder.build()?)
}

/// The whitespace-separated tokens of the input.
struct Tokens<'a> {
    inner: std::iter::Peekable<SplitWhitespace<'a>>,
    remaining: usize,
}

impl<'a> Tokens<'a> {
    fn new(contents: &'a str) -> Self {
        Tokens {
            inner: contents.split_whitespace().peekable(),
            remaining: contents.split_whitespace().count(),
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.remaining -= 1;
        Some(token)
    }

    fn remaining(&self) -> usize {
        self.remaining
    }

    fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn next_number(&mut self, section: &'static str) -> Result<usize, TimParseError> {
        let token = self
            .next()
            .ok_or(TimParseError::UnexpectedEndOfInput(section))?;
        token
            .parse::<usize>()
            .map_err(|_| TimParseError::InvalidNumber {
                token: token.to_owned(),
                section,
            })
    }

    fn next_count(&mut self, item: &'static str) -> Result<usize, TimParseError> {
        let count = self.next_number("the header")?;
        if count > MAX_HEADER_COUNT {
            return Err(TimParseError::HeaderTooLarge { item, count });
        }
        Ok(count)
    }

    fn next_flag(&mut self, section: &'static str) -> Result<bool, TimParseError> {
        match self.next_number(section)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(TimParseError::InvalidFlag {
                value: value as u64,
                section,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 events, 2 rooms, 1 feature, 2 students. Student 0 attends events 0 and 1, student 1
    // attends event 1. Only room 1 has the feature, which event 2 requires. Room 0 seats a single
    // student, so event 1 does not fit in it.
    const BASE: &str = "3 2 1 2
1 5
1 1 0
0 1 0
0
1
0
0
1
";

    #[test]
    fn base_sections_are_read() {
        let instance = parse_tim_str(BASE, 4).expect("valid instance");

        assert_eq!(instance.num_events(), 3);
        assert_eq!(instance.num_rooms(), 2);
        assert_eq!(instance.num_timeslots(), 4);
        assert!(instance.are_conflicting(EventId::new(0), EventId::new(1)));
        assert!(!instance.are_conflicting(EventId::new(0), EventId::new(2)));
        assert_eq!(
            instance.candidate_rooms(EventId::new(0)),
            &[RoomId::new(0), RoomId::new(1)]
        );
        assert_eq!(instance.candidate_rooms(EventId::new(1)), &[RoomId::new(1)]);
        assert_eq!(instance.candidate_rooms(EventId::new(2)), &[RoomId::new(1)]);
        assert_eq!(instance.candidate_timeslots(EventId::new(2)).cardinality(), 4);
    }

    #[test]
    fn events_restricted_to_the_same_single_room_conflict() {
        let instance = parse_tim_str(BASE, 4).expect("valid instance");

        assert!(instance.are_conflicting(EventId::new(1), EventId::new(2)));
    }

    #[test]
    fn optional_sections_are_read() {
        let contents = format!(
            "{BASE}
1 1 0 0
1 1 1 1
0 0 1 1
0 0 1
0 0 0
0 0 0
"
        );

        let instance = parse_tim_str(&contents, 4).expect("valid instance");

        assert_eq!(
            instance.candidate_timeslots(EventId::new(0)).to_vec(),
            vec![Timeslot::new(0), Timeslot::new(1)]
        );
        assert_eq!(instance.events_after(EventId::new(0)), &[EventId::new(2)]);
        assert_eq!(instance.events_before(EventId::new(2)), &[EventId::new(0)]);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let result = parse_tim_str("3 2 1 2\n1", 4);

        assert!(matches!(
            result,
            Err(TimParseError::MissingSections {
                required: 13,
                available: 1,
            })
        ));
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert!(matches!(
            parse_tim_str("3 2", 4),
            Err(TimParseError::UnexpectedEndOfInput("the header"))
        ));
    }

    #[test]
    fn oversized_header_is_rejected_without_allocating() {
        assert!(matches!(
            parse_tim_str("4000000000000000 1 0 0 5", 45),
            Err(TimParseError::HeaderTooLarge {
                item: "events",
                count: 4_000_000_000_000_000,
            })
        ));
        assert!(matches!(
            parse_tim_str("1 1 0 100001 5", 45),
            Err(TimParseError::HeaderTooLarge {
                item: "students",
                ..
            })
        ));
    }

    #[test]
    fn header_declaring_more_values_than_present_is_rejected() {
        // 100000 students attending 100000 events need far more flags than the input holds.
        let result = parse_tim_str("100000 0 100000 100000", 45);

        assert!(matches!(
            result,
            Err(TimParseError::MissingSections {
                required: 20_000_000_000,
                available: 0,
            })
        ));
    }

    #[test]
    fn too_many_timeslots_are_rejected_before_reading() {
        assert!(matches!(
            parse_tim_str(BASE, 1 << 40),
            Err(TimParseError::InvalidInstance(
                InstanceError::UnsupportedNumberOfTimeslots(_)
            ))
        ));
    }

    #[test]
    fn partial_optional_section_is_rejected() {
        let contents = format!("{BASE}1 1 0");

        assert!(matches!(
            parse_tim_str(&contents, 4),
            Err(TimParseError::UnexpectedEndOfInput("the timeslot availability"))
        ));
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        assert!(matches!(
            parse_tim_str("3 two 1 2", 4),
            Err(TimParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_tim_str("1 1 0 1\n1\n2", 4),
            Err(TimParseError::InvalidFlag { value: 2, .. })
        ));
    }

    #[test]
    fn cyclic_precedences_are_reported() {
        let contents = "2 1 0 0
1
1 1
1 1
0 1
1 0
";

        assert!(matches!(
            parse_tim_str(contents, 2),
            Err(TimParseError::InvalidInstance(
                InstanceError::CyclicPrecedence(_)
            ))
        ));
    }
}
