/// Checks on the geometric invariants of a layout, used in debug assertions
/// and tests
pub mod assertions;
