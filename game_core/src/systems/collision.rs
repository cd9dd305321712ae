use crate::{Ball, Config, Events, Paddle, Params, Rect, Side};
use hecs::World;

/// Check ball collisions with the top/bottom walls and the paddles.
///
/// The wall bounce only flips vertical velocity and can coincide with a
/// paddle hit on the same tick. Paddles are tested right first, then left;
/// a hit flips horizontal velocity and speeds it up by 1%, with no cap.
/// Returns whether a paddle was hit, in which case side scoring is skipped.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) -> bool {
    // Collect paddle bounds without holding borrows
    let mut right = None;
    let mut left = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Right => right = Some(paddle.bounds),
            Side::Left => left = Some(paddle.bounds),
        }
    }
    let paddles: Vec<Rect> = [right, left].into_iter().flatten().collect();

    let mut hit_paddle = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bounds.top() <= 0.0 || ball.bounds.bottom() >= config.playfield_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        if paddles.iter().any(|paddle| ball.bounds.overlaps(paddle)) {
            ball.vel.x *= -Params::PADDLE_HIT_FACTOR;
            events.ball_hit_paddle = true;
            hit_paddle = true;
            log::debug!("paddle hit, ball vx now {:.3}", ball.vel.x);
        }
    }
    hit_paddle
}
