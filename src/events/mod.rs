mod controls;
mod pointer;

pub use controls::*;
pub use pointer::*;
