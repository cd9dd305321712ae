use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Apply queued inputs to human-controlled paddles.
///
/// A press adds one step in its direction and the matching release takes it
/// back, so a single held key moves the paddle at exactly one step per tick.
/// Inputs addressed to an AI paddle are dropped.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue, config: &Config) {
    let step = config.ball_speed;

    for input in queue.drain() {
        for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
            if paddle.side != input.side() || *controller != Controller::Human {
                continue;
            }
            match input {
                PaddleInput::Press(_, dir) => paddle.speed += dir.sign() * step,
                PaddleInput::Release(_, dir) => paddle.speed -= dir.sign() * step,
                PaddleInput::Drag(_, y) => {
                    paddle.bounds.set_center_y(y);
                    config.clamp_paddle(&mut paddle.bounds);
                }
            }
        }
    }
}
