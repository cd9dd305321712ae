use crate::{Ball, Config, Events, GameRng, Paddle, Params, ServeRule, Side};
use hecs::World;

/// Check if the ball reached a side wall and award the point.
///
/// Left wall first: the right paddle scores. Otherwise the right wall: the
/// left paddle scores. A wall only counts while the ball is heading into it,
/// so a ball still behind the wall on its way back scores nothing. What
/// happens to the ball afterwards depends on the configured [`ServeRule`].
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = if ball.bounds.left() <= 0.0 && ball.vel.x < 0.0 {
            Side::Right
        } else if ball.bounds.right() >= config.playfield_width && ball.vel.x > 0.0 {
            Side::Left
        } else {
            continue;
        };

        match config.serve_rule {
            ServeRule::Continuous => ball.vel.x *= -Params::SIDE_WALL_FACTOR,
            ServeRule::ResetToCenter => ball.reset(config, rng),
        }
        scorer = Some(side);
    }

    let Some(side) = scorer else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.score += 1;
            log::debug!("{:?} paddle scores, now {}", side, paddle.score);
        }
    }
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
}
