//! Local computation module for the computed-value fixture.
//!
//! Deliberately trivial: the point is that a separate in-crate module
//! still links at the same relative path after redeployment, not that
//! the arithmetic is interesting.

/// Add two operands sourced from the structured-data resource.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
