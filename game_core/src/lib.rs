pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use view::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to human paddle speeds)
    ingest_inputs(world, inputs, config);

    // 2. Move ball
    move_ball(world);

    // 3. Walls and paddles; a paddle hit pre-empts scoring
    if !check_collisions(world, config, events) {
        // 4. Side walls award points
        check_scoring(world, config, events, rng);
    }

    // 5. Move paddles (AI follows the ball's new position)
    move_paddles(world, config);
}

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    let speed = match controller {
        Controller::Human => 0.0,
        Controller::Ai => config.ball_speed,
    };
    world.spawn((Paddle::new(side, config.paddle_spawn(side), speed), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Current scores of both paddles
pub fn read_score(world: &World) -> Score {
    let mut score = Score::new();
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => score.left = paddle.score,
            Side::Right => score.right = paddle.score,
        }
    }
    score
}
