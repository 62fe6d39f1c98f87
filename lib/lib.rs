/// Chess domain types and rules.
pub mod chess;
/// Automated move selection.
pub mod ai;
/// Assorted utilities.
pub mod util;
