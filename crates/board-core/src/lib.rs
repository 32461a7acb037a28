pub mod board;
pub mod constants;
pub mod error;
pub mod palette;
pub mod scene;
pub mod snapshot;

pub use board::*;
pub use constants::*;
pub use error::*;
pub use palette::*;
pub use scene::*;
pub use snapshot::*;
