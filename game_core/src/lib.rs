pub mod audio;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod hud;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod util;

pub use components::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config),))
}
