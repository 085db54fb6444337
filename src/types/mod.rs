//! Data types for the grid renderer.

mod cell;
mod data;
mod options;

pub use cell::*;
pub use data::*;
pub use options::*;
