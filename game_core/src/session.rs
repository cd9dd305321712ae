//! A single match: one ball, two paddles, and the rules of the chosen mode

use hecs::World;

use crate::{
    create_ball, create_paddle, read_score, step, Ball, Config, Controller, Events, GameRng,
    InputQueue, Paddle, PaddleInput, Score, Side,
};

/// Game mode picked on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// First to the win score
    Arcade,
    /// No win condition
    Endless,
}

/// Opponent picked on the versus menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Versus {
    /// Left paddle is AI-controlled
    Ai,
    /// Both paddles are human
    Player,
}

impl Versus {
    /// Name shown next to a side's score
    pub fn label(self, side: Side) -> &'static str {
        match (self, side) {
            (Versus::Ai, Side::Right) => "Our",
            (Versus::Ai, Side::Left) => "AI",
            (Versus::Player, Side::Right) => "Player Right",
            (Versus::Player, Side::Left) => "Player Left",
        }
    }

    /// Winner name shown on the end screen
    pub fn winner_name(self, side: Side) -> &'static str {
        match (self, side) {
            (Versus::Ai, Side::Right) => "YOU",
            (Versus::Ai, Side::Left) => "AI",
            (Versus::Player, Side::Right) => "RIGHT PLAYER",
            (Versus::Player, Side::Left) => "LEFT PLAYER",
        }
    }

    pub fn controller(self, side: Side) -> Controller {
        match (self, side) {
            (Versus::Ai, Side::Left) => Controller::Ai,
            _ => Controller::Human,
        }
    }
}

/// Live match state, created when the versus menu is confirmed
pub struct Session {
    pub world: World,
    pub config: Config,
    pub mode: Mode,
    pub versus: Versus,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub frame: u64,
    winner: Option<Side>,
}

impl Session {
    pub fn new(config: Config, mode: Mode, versus: Versus, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        create_paddle(&mut world, Side::Left, versus.controller(Side::Left), &config);
        create_paddle(&mut world, Side::Right, versus.controller(Side::Right), &config);

        // Create ball
        create_ball(&mut world, Ball::serve(&config, &mut rng));

        log::info!("match started: {:?} vs {:?} (seed {})", mode, versus, seed);

        Self {
            world,
            config,
            mode,
            versus,
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            frame: 0,
            winner: None,
        }
    }

    pub fn push_input(&mut self, input: PaddleInput) {
        self.inputs.push_input(input);
    }

    /// Run one frame. Returns the winner once an arcade match is decided;
    /// after that the match is frozen and further ticks change nothing.
    pub fn tick(&mut self) -> Option<Side> {
        if self.winner.is_some() {
            return self.winner;
        }
        if let Some(side) = self.decided() {
            self.winner = Some(side);
            return self.winner;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
        );
        self.frame += 1;

        self.winner = self.decided();
        if let Some(side) = self.winner {
            let score = self.score();
            log::info!(
                "{:?} side wins {}-{} after {} frames",
                side,
                score.get(side),
                score.get(side.opposite()),
                self.frame
            );
        }
        self.winner
    }

    fn decided(&self) -> Option<Side> {
        match self.mode {
            Mode::Arcade => self.score().has_winner(self.config.win_score),
            Mode::Endless => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn score(&self) -> Score {
        read_score(&self.world)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// "<name> Score: <n>" for the HUD
    pub fn score_label(&self, side: Side) -> String {
        format!("{} Score: {}", self.versus.label(side), self.score().get(side))
    }

    /// "<name> WIN" once the match is decided
    pub fn banner(&self) -> Option<String> {
        self.winner
            .map(|side| format!("{} WIN", self.versus.winner_name(side)))
    }
}
