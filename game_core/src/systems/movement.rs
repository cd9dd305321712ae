use crate::{Ball, Config, Controller, Paddle, Rect};
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.bounds.translate(ball.vel);
    }
}

/// Advance every paddle with its controller's strategy, then clamp it
pub fn move_paddles(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.bounds.top());

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        match controller {
            Controller::Human => paddle.bounds.pos.y += paddle.speed,
            Controller::Ai => {
                if let Some(ball_y) = ball_y {
                    paddle.bounds.pos.y += ai_delta(&paddle.bounds, paddle.speed, ball_y);
                }
            }
        }
        config.clamp_paddle(&mut paddle.bounds);
    }
}

/// Vertical move for an AI paddle chasing `target_y`.
///
/// Both edge tests use the position before moving and their effects add up,
/// so a paddle straddling the target stays put and one whose edge sits right
/// at the target jitters.
pub fn ai_delta(bounds: &Rect, step: f32, target_y: f32) -> f32 {
    let mut delta = 0.0;
    if bounds.top() < target_y {
        delta += step;
    }
    if bounds.bottom() > target_y {
        delta -= step;
    }
    delta
}
