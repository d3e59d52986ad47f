//! Environment snapshot builder.
//!
//! The filter takes the environment as an explicit input instead of
//! reading the process globals itself, keeping it pure and testable;
//! [`capture`] is the thin production adapter over `std::env::vars()`.

use std::collections::BTreeMap;

/// Filtered view of the process environment, keyed in stable order.
pub type EnvironmentSnapshot = BTreeMap<String, String>;

/// Drop every variable whose name starts with `reserved_prefix`; keep
/// all other pairs unchanged. An empty environment yields an empty
/// snapshot; there are no failure modes.
pub fn filter_environment<I>(vars: I, reserved_prefix: &str) -> EnvironmentSnapshot
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(name, _)| !name.starts_with(reserved_prefix))
        .collect()
}

/// Snapshot the live process environment with reserved names removed.
pub fn capture(reserved_prefix: &str) -> EnvironmentSnapshot {
    filter_environment(std::env::vars(), reserved_prefix)
}
