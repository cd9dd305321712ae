use game_core::*;
use glam::Vec2;
use game_core::systems::check_collisions;
use hecs::World;
use proptest::prelude::*;

fn place_ball(session: &mut Session, bounds: Rect, vel: Vec2) {
    for (_e, ball) in session.world.query_mut::<&mut Ball>() {
        ball.bounds = bounds;
        ball.vel = vel;
    }
}

fn set_scores(session: &mut Session, left: u32, right: u32) {
    for (_e, paddle) in session.world.query_mut::<&mut Paddle>() {
        paddle.score = match paddle.side {
            Side::Left => left,
            Side::Right => right,
        };
    }
}

fn start(fsm: &mut GameFsm, mode_presses: usize, versus_presses: usize) {
    for _ in 0..mode_presses {
        fsm.transition(GameAction::Down);
    }
    fsm.transition(GameAction::Confirm);
    for _ in 0..versus_presses {
        fsm.transition(GameAction::Down);
    }
    fsm.transition(GameAction::Confirm);
}

#[test]
fn test_arcade_match_point_to_main_menu() {
    let mut fsm = GameFsm::new(Config::new(), 7);
    start(&mut fsm, 0, 0);
    assert_eq!(fsm.state(), FsmState::Arcade);

    // Ball about to leave through the right wall, well above the right paddle
    let session = fsm.session_mut().unwrap();
    set_scores(session, 10, 10);
    place_ball(
        session,
        Rect::new(1250.0, 10.0, 30.0, 30.0),
        Vec2::new(7.0, 0.0),
    );

    assert_eq!(fsm.tick(), FsmState::EndScreen);
    let session = fsm.session().unwrap();
    assert_eq!(session.score(), Score { left: 11, right: 10 });
    assert_eq!(session.banner().as_deref(), Some("AI WIN"));

    let View::Frame(frame) = fsm.view() else {
        panic!("end screen should draw the last frame");
    };
    assert_eq!(frame.left_label, "AI Score: 11");
    assert_eq!(frame.right_label, "Our Score: 10");

    let mut ticks = 1;
    while fsm.tick() == FsmState::EndScreen {
        ticks += 1;
    }
    assert_eq!(ticks, Config::new().win_delay_ticks());
    assert_eq!(fsm.state(), FsmState::MainMenu);
    assert!(fsm.session().is_none());
}

#[test]
fn test_player_match_right_wins() {
    let mut fsm = GameFsm::new(Config::new(), 3);
    start(&mut fsm, 0, 1);

    let session = fsm.session_mut().unwrap();
    assert_eq!(session.versus, Versus::Player);
    set_scores(session, 4, 10);
    place_ball(
        session,
        Rect::new(3.0, 10.0, 30.0, 30.0),
        Vec2::new(-7.0, 0.0),
    );

    assert_eq!(fsm.tick(), FsmState::EndScreen);
    assert_eq!(
        fsm.session().unwrap().banner().as_deref(),
        Some("RIGHT PLAYER WIN")
    );
}

#[test]
fn test_endless_match_runs_past_win_score() {
    let mut fsm = GameFsm::new(Config::new(), 3);
    start(&mut fsm, 1, 1);
    assert_eq!(fsm.state(), FsmState::Endless);

    set_scores(fsm.session_mut().unwrap(), 11, 11);
    for _ in 0..1000 {
        assert_eq!(fsm.tick(), FsmState::Endless);
    }
    assert_eq!(fsm.session().unwrap().banner(), None);

    fsm.transition(GameAction::Back);
    assert_eq!(fsm.state(), FsmState::MainMenu);
}

#[test]
fn test_held_key_drives_paddle_to_edges() {
    let mut fsm = GameFsm::new(Config::new(), 5);
    start(&mut fsm, 1, 1);

    fsm.paddle_input(PaddleInput::Press(Side::Right, Direction::Up));
    for _ in 0..100 {
        fsm.tick();
    }
    let right = fsm.session().unwrap().paddle(Side::Right).unwrap();
    assert_eq!(right.bounds.top(), 0.0);

    fsm.paddle_input(PaddleInput::Release(Side::Right, Direction::Up));
    fsm.paddle_input(PaddleInput::Press(Side::Right, Direction::Down));
    for _ in 0..200 {
        fsm.tick();
    }
    let right = fsm.session().unwrap().paddle(Side::Right).unwrap();
    assert_eq!(right.bounds.bottom(), 720.0);

    // The other paddle never moved
    let left = fsm.session().unwrap().paddle(Side::Left).unwrap();
    assert_eq!(left.bounds, Config::new().paddle_spawn(Side::Left));
}

#[test]
fn test_ai_paddle_chases_ball() {
    let mut session = Session::new(Config::new(), Mode::Endless, Versus::Ai, 1);
    place_ball(
        &mut session,
        Rect::new(625.0, 50.0, 30.0, 30.0),
        Vec2::ZERO,
    );

    let start = session.paddle(Side::Left).unwrap().bounds.top();
    session.tick();
    let after = session.paddle(Side::Left).unwrap().bounds.top();
    assert_eq!(after, start - 7.0);

    for _ in 0..100 {
        session.tick();
    }
    let paddle = session.paddle(Side::Left).unwrap().bounds;
    assert!(paddle.top() <= 50.0 && paddle.bottom() >= 50.0);
}

#[test]
fn test_ball_bounces_between_paddles_and_speeds_up() {
    let config = Config::new();
    let mut world = World::new();
    let mut events = Events::new();
    let mut inputs = InputQueue::new();
    let mut rng = GameRng::new(0);

    create_paddle(&mut world, Side::Left, Controller::Human, &config);
    create_paddle(&mut world, Side::Right, Controller::Human, &config);
    // Level with both paddles, heading right
    create_ball(
        &mut world,
        Ball::new(Rect::new(625.0, 345.0, 30.0, 30.0), Vec2::new(7.0, 0.0)),
    );

    let mut hits = 0;
    for _ in 0..2000 {
        step(&mut world, &config, &mut events, &mut inputs, &mut rng);
        if events.ball_hit_paddle {
            hits += 1;
        }
        assert!(!events.left_scored && !events.right_scored);
    }
    assert!(hits >= 2);

    let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap();
    let expected = 7.0 * Params::PADDLE_HIT_FACTOR.powi(hits);
    assert!((ball.vel.x.abs() - expected).abs() < 1e-3);
    assert_eq!(read_score(&world), Score::new());
}

#[test]
fn test_speed_override_reaches_session() {
    let config = Config::from_json(r#"{"ball_speed": 9.0}"#, 800.0, 600.0).unwrap();
    let mut fsm = GameFsm::new(config, 1);
    start(&mut fsm, 0, 0);

    let session = fsm.session_mut().unwrap();
    assert_eq!(session.config.win_score, Params::WIN_SCORE);
    let ball = session.ball().unwrap();
    assert_eq!(ball.vel.x.abs(), 9.0);
    assert_eq!(ball.vel.y.abs(), 9.0);
    assert_eq!(ball.bounds, session.config.ball_spawn());

    // Threshold stays at 11
    set_scores(session, 0, 3);
    assert_eq!(fsm.tick(), FsmState::Arcade);
}

#[test]
fn test_grazing_wall_crossing_scores_once() {
    let mut session = Session::new(Config::new(), Mode::Endless, Versus::Player, 8);
    // Paddles out of the ball's row
    session.push_input(PaddleInput::Drag(Side::Left, 0.0));
    session.push_input(PaddleInput::Drag(Side::Right, 0.0));
    place_ball(
        &mut session,
        Rect::new(0.05, 400.0, 30.0, 30.0),
        Vec2::new(-7.0, 0.0),
    );

    for _ in 0..6 {
        session.tick();
    }

    assert_eq!(session.score(), Score { left: 0, right: 1 });
    assert!(session.ball().unwrap().bounds.left() > 0.0);
}

fn bounce_world(vel: Vec2) -> (World, Config) {
    let config = Config::new();
    let mut world = World::new();
    create_paddle(&mut world, Side::Left, Controller::Human, &config);
    create_paddle(&mut world, Side::Right, Controller::Human, &config);
    // Resting inside the right paddle, clear of both walls
    create_ball(
        &mut world,
        Ball::new(Rect::new(1250.0, 345.0, 30.0, 30.0), vel),
    );
    (world, config)
}

#[test]
fn test_frame_clock_drives_fixed_ticks() {
    let config = Config::new();
    let mut clock = FrameClock::new(config.frame_rate);
    let mut fsm = GameFsm::new(config, 9);
    start(&mut fsm, 1, 0);

    // One second of 60 Hz host frames
    let mut ticks = 0;
    for _ in 0..60 {
        for _ in 0..clock.advance(1.0 / 60.0) {
            fsm.tick();
            ticks += 1;
        }
    }
    assert!((119..=120).contains(&ticks));
    assert_eq!(fsm.session().unwrap().frame, ticks as u64);
}

proptest! {
    #[test]
    fn prop_paddle_hits_compound_speed(
        speed in 1.0f32..20.0,
        vy in -20.0f32..20.0,
        hits in 0i32..40,
    ) {
        let (mut world, config) = bounce_world(Vec2::new(speed, vy));
        let mut events = Events::new();
        for _ in 0..hits {
            prop_assert!(check_collisions(&mut world, &config, &mut events));
            prop_assert!(!events.ball_hit_wall);
        }

        let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap();
        let expected = speed * Params::PADDLE_HIT_FACTOR.powi(hits);
        prop_assert!((ball.vel.x.abs() - expected).abs() <= expected * 1e-4);
        prop_assert_eq!(ball.vel.y, vy);
    }

    #[test]
    fn prop_wall_crossing_scores_once(
        gap in 0.0f32..10.0,
        speed in 1.0f32..20.0,
        towards_left in any::<bool>(),
    ) {
        let config = Config::new();
        let mut session = Session::new(config.clone(), Mode::Endless, Versus::Player, 3);
        // High row, out of both paddles' reach
        let (x, vx) = if towards_left {
            (gap, -speed)
        } else {
            (config.playfield_width - config.ball_size - gap, speed)
        };
        place_ball(&mut session, Rect::new(x, 10.0, 30.0, 30.0), Vec2::new(vx, 0.0));

        for _ in 0..30 {
            session.tick();
        }

        let score = session.score();
        if towards_left {
            prop_assert_eq!(score, Score { left: 0, right: 1 });
        } else {
            prop_assert_eq!(score, Score { left: 1, right: 0 });
        }
        let ball = session.ball().unwrap().bounds;
        prop_assert!(ball.left() > 0.0 && ball.right() < config.playfield_width);
    }

    #[test]
    fn prop_paddles_stay_on_playfield(
        presses in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..60),
        drag in prop::option::of(-500.0f32..1500.0),
    ) {
        let mut session = Session::new(Config::new(), Mode::Endless, Versus::Player, 2);
        for (left, up, press) in presses {
            let side = if left { Side::Left } else { Side::Right };
            let dir = if up { Direction::Up } else { Direction::Down };
            let input = if press {
                PaddleInput::Press(side, dir)
            } else {
                PaddleInput::Release(side, dir)
            };
            session.push_input(input);
            session.tick();
            if let Some(y) = drag {
                session.push_input(PaddleInput::Drag(side, y));
            }
            for side in [Side::Left, Side::Right] {
                let bounds = session.paddle(side).unwrap().bounds;
                prop_assert!(bounds.top() >= 0.0);
                prop_assert!(bounds.bottom() <= 720.0);
            }
        }
    }

    #[test]
    fn prop_scores_never_decrease(seed in any::<u64>(), ticks in 1usize..3000) {
        let mut session = Session::new(Config::new(), Mode::Endless, Versus::Ai, seed);
        let mut last = session.score();
        for _ in 0..ticks {
            session.tick();
            let score = session.score();
            prop_assert!(score.left >= last.left && score.right >= last.right);
            prop_assert!(score.left + score.right <= last.left + last.right + 1);
            last = score;
        }
    }

    #[test]
    fn prop_overlap_is_symmetric(
        a in (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..50.0, 0.0f32..50.0),
        b in (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..50.0, 0.0f32..50.0),
    ) {
        let a = Rect::new(a.0, a.1, a.2, a.3);
        let b = Rect::new(b.0, b.1, b.2, b.3);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
