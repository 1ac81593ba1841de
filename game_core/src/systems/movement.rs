use hecs::World;

use crate::input::InputState;
use crate::{Arena, Controller, Paddle, Settings};

/// Apply paddle movement based on directions.
///
/// A move that would push any part of the paddle out of the field is dropped,
/// so the paddle stops short of the wall instead of being clamped onto it.
/// With mouse control on, Player1 heads straight for the pointer.
pub fn move_paddles(world: &mut World, arena: &Arena, settings: &Settings, input: &InputState) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.old_pos = paddle.pos;

        if settings.mouse_control && paddle.controller == Controller::Player1 {
            paddle.direction = input.mouse.y - paddle.pos.y;
        }

        let new_y = paddle.pos.y + paddle.direction;
        if arena.paddle_fits(new_y, paddle.size.y) {
            paddle.pos.y = new_y;
        }

        paddle.velocity = paddle.old_pos.y - paddle.pos.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config, Side};
    use glam::Vec2;

    fn setup() -> (World, Arena, Settings) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        (world, Arena::new(&config), Settings::new(&config))
    }

    fn set_paddle(world: &mut World, side: Side, y: f32, direction: f32) {
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.pos.y = y;
                paddle.direction = direction;
            }
        }
    }

    fn paddle(world: &World, side: Side) -> Paddle {
        *world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .expect("paddle")
            .1
    }

    #[test]
    fn test_paddle_moves_and_reports_velocity() {
        let (mut world, arena, settings) = setup();
        set_paddle(&mut world, Side::Left, 250.0, 4.0);
        set_paddle(&mut world, Side::Right, 250.0, -4.0);

        move_paddles(&mut world, &arena, &settings, &InputState::new());

        let left = paddle(&world, Side::Left);
        assert_eq!(left.pos.y, 254.0);
        assert_eq!(left.velocity, -4.0, "moving down is negative velocity");
        let right = paddle(&world, Side::Right);
        assert_eq!(right.pos.y, 246.0);
        assert_eq!(right.velocity, 4.0);
    }

    #[test]
    fn test_out_of_bounds_move_is_dropped() {
        let (mut world, arena, settings) = setup();
        // 2px from the top: a 4px step up would leave the field
        set_paddle(&mut world, Side::Left, 2.0, -4.0);
        // 497 + 100 = 597, a 4px step down would reach 601
        set_paddle(&mut world, Side::Right, 497.0, 4.0);

        move_paddles(&mut world, &arena, &settings, &InputState::new());

        let left = paddle(&world, Side::Left);
        assert_eq!(left.pos.y, 2.0, "paddle stops short, not clamped to 0");
        assert_eq!(left.velocity, 0.0);
        assert_eq!(paddle(&world, Side::Right).pos.y, 497.0);
    }

    #[test]
    fn test_mouse_control_drives_player1() {
        let (mut world, arena, mut settings) = setup();
        settings.mouse_control = true;
        let mut input = InputState::new();
        input.mouse_move(110.0, 130.0, Vec2::new(10.0, 10.0));

        move_paddles(&mut world, &arena, &settings, &input);

        let left = paddle(&world, Side::Left);
        assert_eq!(left.pos.y, 120.0);
        assert_eq!(left.velocity, 130.0);
        assert_eq!(paddle(&world, Side::Right).pos.y, 250.0, "Player2 ignores the mouse");
    }

    #[test]
    fn test_mouse_outside_field_is_dropped() {
        let (mut world, arena, mut settings) = setup();
        settings.mouse_control = true;
        let mut input = InputState::new();
        input.mouse_move(0.0, 560.0, Vec2::new(10.0, 10.0));

        move_paddles(&mut world, &arena, &settings, &input);

        assert_eq!(paddle(&world, Side::Left).pos.y, 250.0);
    }
}
