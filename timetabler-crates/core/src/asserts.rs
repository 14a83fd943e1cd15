//! Leveled assertion macros.
//!
//! Cheap invariant checks use the `simple` level and are always active. The more expensive checks
//! (e.g. recounting the per-timeslot candidate counters of a search node) only run in tests or
//! when the `debug-checks` feature is enabled.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const TIMETABLER_ASSERT_LEVEL_DEFINITION: u8 = TIMETABLER_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const TIMETABLER_ASSERT_LEVEL_DEFINITION: u8 = TIMETABLER_ASSERT_ADVANCED;

pub const TIMETABLER_ASSERT_SIMPLE: u8 = 1;
pub const TIMETABLER_ASSERT_MODERATE: u8 = 2;
pub const TIMETABLER_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::TIMETABLER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TIMETABLER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::TIMETABLER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TIMETABLER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! timetabler_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::TIMETABLER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::TIMETABLER_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
