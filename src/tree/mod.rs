//! Element-tree abstraction the renderer builds into.

mod backend;
#[cfg(target_arch = "wasm32")]
mod dom;
mod memory;

pub use backend::*;
#[cfg(target_arch = "wasm32")]
pub use dom::*;
pub use memory::*;
