use hecs::World;
use log::debug;

use crate::map::Aabb;
use crate::systems::scoring::award_point;
use crate::util::random_adjust;
use crate::{Arena, Ball, Config, Events, GameEvent, GameRng, Paddle, Rally, Score, SimError, Side};

/// What the ball ran into this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallOutcome {
    pub paddle_hit: Option<Side>,
    pub scorer: Option<Side>,
}

#[derive(Clone, Copy)]
struct PaddleData {
    bounds: Aabb,
    width: f32,
    velocity: f32,
}

fn paddle_data(world: &World, side: Side) -> Result<PaddleData, SimError> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| PaddleData {
            bounds: p.bounds(),
            width: p.size.x,
            velocity: p.velocity,
        })
        .ok_or(SimError::MissingPaddle(side))
}

/// Send the ball back from a paddle face
fn bounce(ball: &mut Ball, side: Side, paddle: &PaddleData, rally: &Rally, jitter: f32, rng: &mut GameRng) {
    let speed = (ball.dir.x.abs() + ball.acceleration) * rally.multiplier;
    ball.dir.x = match side {
        Side::Left => speed,
        Side::Right => -speed,
    };
    ball.dir.y += paddle.velocity * -1.0 * ball.inertial_transfer;
    ball.dir.y += random_adjust(&mut rng.0, jitter, false);
}

/// Serve the ball away from the wall it just reached, heading for `toward`
fn serve(ball: &mut Ball, toward: Side, rally: &Rally) {
    let speed = ball.initial.x.abs() * rally.multiplier;
    ball.dir.x = match toward {
        Side::Left => -speed,
        Side::Right => speed,
    };
    ball.dir.y = ball.initial.y;
}

/// Advance the ball one frame and resolve wall and paddle collisions.
///
/// Edges are tested in a fixed order: right, bottom, left, top. Paddle tests
/// use the paddle positions already committed for this frame.
#[allow(clippy::too_many_arguments)]
pub fn update_ball(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    rally: &mut Rally,
    events: &mut Events,
    rng: &mut GameRng,
) -> Result<BallOutcome, SimError> {
    // Collect paddle data without holding borrows
    let left = paddle_data(world, Side::Left)?;
    let right = paddle_data(world, Side::Right)?;

    let mut outcome = BallOutcome::default();
    {
        let (_entity, ball) = world
            .query_mut::<&mut Ball>()
            .into_iter()
            .next()
            .ok_or(SimError::MissingBall)?;

        let mut next = ball.pos + ball.dir;
        let candidate = Aabb::from_pos_size(next, ball.size);

        // Right edge
        let right_plane = arena.paddle_plane(Side::Right, right.width);
        if next.x + ball.size.x > right_plane {
            next.x = right_plane - ball.size.x;
            if candidate.overlaps_y(&right.bounds) {
                rally.register_hit();
                debug!(
                    "Paddle hit! Rally: {} Speed: {:.2}x",
                    rally.hits, rally.multiplier
                );
                bounce(ball, Side::Right, &right, rally, config.jitter, rng);
                events.turn_on(GameEvent::BallHitPaddle);
                outcome.paddle_hit = Some(Side::Right);
            } else {
                let scorer = Side::Right.opposite();
                award_point(scorer, score, rally, events);
                events.turn_on(GameEvent::BallHitWall);
                serve(ball, scorer, rally);
                outcome.scorer = Some(scorer);
            }
        }

        // Bottom wall
        if next.y + ball.size.y > arena.bottom_wall() {
            ball.dir.y = -ball.dir.y.abs();
            events.turn_on(GameEvent::BallHitWall);
        }

        // Left edge
        let left_plane = arena.paddle_plane(Side::Left, left.width);
        if next.x < left_plane {
            next.x = left_plane;
            if candidate.overlaps_y(&left.bounds) {
                rally.register_hit();
                debug!(
                    "Paddle hit! Rally: {} Speed: {:.2}x",
                    rally.hits, rally.multiplier
                );
                bounce(ball, Side::Left, &left, rally, config.jitter, rng);
                events.turn_on(GameEvent::BallHitPaddle);
                outcome.paddle_hit = Some(Side::Left);
            } else {
                let scorer = Side::Left.opposite();
                award_point(scorer, score, rally, events);
                events.turn_on(GameEvent::BallHitWall);
                serve(ball, scorer, rally);
                outcome.scorer = Some(scorer);
            }
        }

        // Top wall
        if next.y < arena.top_wall() {
            ball.dir.y = ball.dir.y.abs();
            events.turn_on(GameEvent::BallHitWall);
        }

        ball.pos = next;
    }

    if outcome.scorer.is_some() || outcome.paddle_hit.is_some() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if outcome.scorer.is_some() {
                paddle.has_hit = false;
            }
            if outcome.paddle_hit == Some(paddle.side) {
                paddle.has_hit = true;
            }
        }
    }

    Ok(outcome)
}

/// Post-step pass keeping both direction components within the maximum
pub fn clamp_ball_speed(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.clamp_speed();
    }
}
