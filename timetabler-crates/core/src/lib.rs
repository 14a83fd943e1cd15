//! # Timetabler
//! Timetabler assigns every event of a timetabling problem (e.g. the exams or classes of a
//! university) to a timeslot and a room, such that
//! * no two conflicting events (e.g. events which share a student) take place at the same time,
//! * every event takes place in one of its candidate timeslots and rooms,
//! * every room hosts at most one event per timeslot, and
//! * precedences between events are respected.
//!
//! The solver is a backtracking search over bitset-encoded candidate timeslots. Whether the events
//! of a timeslot can still be given distinct rooms is verified during search by a bipartite
//! matching per timeslot. The search stops at the first timetable which satisfies every
//! constraint.
//!
//! # Using Timetabler
//! A problem is described by an [`Instance`], which is created with an [`InstanceBuilder`]:
//! ```rust
//! # use timetabler_core::InstanceBuilder;
//! # use timetabler_core::RoomId;
//! # use timetabler_core::Timeslot;
//! // 3 timeslots and 2 rooms
//! let mut builder = InstanceBuilder::new(3, 2);
//!
//! let lecture = builder.add_unrestricted_event();
//! let lab = builder.add_event([Timeslot::new(1), Timeslot::new(2)], [RoomId::new(1)]);
//! let exam = builder.add_unrestricted_event();
//!
//! // The lecture and the lab share students
//! builder.add_conflict(lecture, lab);
//! // The exam takes place after the lecture
//! builder.add_precedence(lecture, exam);
//!
//! let instance = builder.build().expect("valid instance");
//! ```
//!
//! A timetable is then found with the [`TimetableSolver`], given a
//! [`termination::TerminationCondition`] which bounds the search:
//! ```rust
//! # use timetabler_core::InstanceBuilder;
//! # use timetabler_core::TimetableSolver;
//! # use timetabler_core::options::SolverOptions;
//! # use timetabler_core::results::SearchResult;
//! # use timetabler_core::termination::IterationBudget;
//! # let mut builder = InstanceBuilder::new(3, 2);
//! # let lecture = builder.add_unrestricted_event();
//! # let exam = builder.add_unrestricted_event();
//! # builder.add_precedence(lecture, exam);
//! # let instance = builder.build().expect("valid instance");
//! let mut solver = TimetableSolver::with_options(SolverOptions::with_seed(7));
//! let result = solver
//!     .solve(&instance, &mut IterationBudget::new(10_000))
//!     .expect("the instance fits the default limits");
//!
//! if let SearchResult::Satisfiable(solution) = result {
//!     assert!(solution.timeslot(lecture) < solution.timeslot(exam));
//!     assert!(solution.is_valid(&instance));
//! } else {
//!     panic!("This problem should have a timetable")
//! }
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod instance;
pub(crate) mod matching;
pub mod statistics;

mod api;

pub use api::solver::TimetableSolver;
pub use api::*;
pub use basic_types::EventId;
pub use basic_types::Random;
pub use basic_types::RoomId;
pub use basic_types::Timeslot;
pub use basic_types::TimeslotCounters;
pub use basic_types::TimeslotSet;
pub use basic_types::MAX_NUM_TIMESLOTS;
pub use convert_case;
pub use engine::LevelCounts;
pub use engine::SearchStatistics;
pub use engine::State;
pub use instance::Instance;
pub use instance::InstanceBuilder;
pub use instance::InstanceError;
pub use matching::EventRoomAllocation;
pub use matching::MAX_NUM_ROOMS;
pub use rand;
