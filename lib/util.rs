mod grid;
mod integer;

pub use grid::*;
pub use integer::*;
