use std::fmt::Debug;
use std::fmt::Formatter;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::CapacityError;
use crate::basic_types::MAX_NUM_TIMESLOTS;
use crate::matching::MAX_NUM_ROOMS;
use crate::Instance;

/// Options for the [`TimetableSolver`](crate::TimetableSolver).
pub struct SolverOptions {
    /// The largest instance which the solver accepts.
    pub limits: SearchLimits,
    /// A random number generator which is used to break ties between equally scarce timeslots.
    pub random_generator: SmallRng,
    /// How ties between equally scarce timeslots are broken.
    pub tie_breaking: TieBreaking,
}

impl Debug for SolverOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverOptions")
            .field("limits", &self.limits)
            .field("tie_breaking", &self.tie_breaking)
            .finish_non_exhaustive()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            limits: SearchLimits::default(),
            random_generator: SmallRng::seed_from_u64(42),
            tie_breaking: TieBreaking::default(),
        }
    }
}

impl SolverOptions {
    /// The default options, with the random generator seeded by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        SolverOptions {
            random_generator: SmallRng::seed_from_u64(seed),
            ..Default::default()
        }
    }
}

/// The instance-size ceilings of the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_events: usize,
    pub max_rooms: usize,
    /// Can not be raised beyond [`MAX_NUM_TIMESLOTS`].
    pub max_timeslots: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_events: 600,
            max_rooms: 20,
            max_timeslots: MAX_NUM_TIMESLOTS,
        }
    }
}

impl SearchLimits {
    /// Checks whether `instance` fits within these limits.
    pub fn check(&self, instance: &Instance) -> Result<(), CapacityError> {
        if instance.num_events() > self.max_events {
            return Err(CapacityError::TooManyEvents {
                num_events: instance.num_events(),
                max_events: self.max_events,
            });
        }

        let max_rooms = self.max_rooms.min(MAX_NUM_ROOMS);
        if instance.num_rooms() > max_rooms {
            return Err(CapacityError::TooManyRooms {
                num_rooms: instance.num_rooms(),
                max_rooms,
            });
        }

        let max_timeslots = self.max_timeslots.min(MAX_NUM_TIMESLOTS);
        if instance.num_timeslots() > max_timeslots {
            return Err(CapacityError::TooManyTimeslots {
                num_timeslots: instance.num_timeslots(),
                max_timeslots,
            });
        }

        Ok(())
    }
}

/// How the solver decides between timeslots which are equally good according to its heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TieBreaking {
    /// Every tied timeslot is chosen with equal probability.
    #[default]
    Random,
    /// The earliest tied timeslot is chosen.
    InOrder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstanceBuilder;

    fn instance(num_events: usize, num_rooms: usize, num_timeslots: usize) -> Instance {
        let mut builder = InstanceBuilder::new(num_timeslots, num_rooms);
        for _ in 0..num_events {
            let _ = builder.add_unrestricted_event();
        }
        builder.build().expect("valid instance")
    }

    #[test]
    fn instance_within_the_limits_is_accepted() {
        assert_eq!(SearchLimits::default().check(&instance(10, 3, 45)), Ok(()));
    }

    #[test]
    fn every_ceiling_is_checked() {
        let limits = SearchLimits {
            max_events: 2,
            max_rooms: 2,
            max_timeslots: 5,
        };

        assert_eq!(
            limits.check(&instance(3, 1, 1)),
            Err(CapacityError::TooManyEvents {
                num_events: 3,
                max_events: 2
            })
        );
        assert_eq!(
            limits.check(&instance(1, 3, 1)),
            Err(CapacityError::TooManyRooms {
                num_rooms: 3,
                max_rooms: 2
            })
        );
        assert_eq!(
            limits.check(&instance(1, 1, 6)),
            Err(CapacityError::TooManyTimeslots {
                num_timeslots: 6,
                max_timeslots: 5
            })
        );
    }

    #[test]
    fn room_ceiling_is_bounded_by_the_matching() {
        let limits = SearchLimits {
            max_rooms: 100,
            ..Default::default()
        };

        assert!(matches!(
            limits.check(&instance(1, 65, 1)),
            Err(CapacityError::TooManyRooms { max_rooms: 64, .. })
        ));
    }
}
