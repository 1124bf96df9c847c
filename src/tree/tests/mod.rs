//! Various collections of unit tests
//!
//! Failures found by fuzzing get turned into new unit tests, so a few of those live here alongside
//! the hand-written cases and the randomized property checks.

/// "Basic" fuzz tests -- regression cases in the shape printed by the fuzz harness
///
/// Generated from the `basic_u8` fuzz target.
mod basic;
/// Seeded, randomized checks of the red-black properties over many insertion orders
mod properties;
