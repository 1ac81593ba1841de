pub mod collision;
pub mod computer;
pub mod control;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use computer::*;
pub use control::*;
pub use movement::*;
pub use scoring::*;
