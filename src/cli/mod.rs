// Command-line handlers
// Each handler runs one validator and returns an `Outcome` for rendering.

pub mod check;
pub mod output;

pub use check::DateDirection;
pub use output::{render, Outcome};
