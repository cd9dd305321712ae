use crate::{PaddleInput, Params, Side};

/// Converts host frame time into a whole number of fixed simulation ticks
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    pub tick_dt: f32,
    pub accumulator: f32,
    pub max_substeps: u32,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            tick_dt: 1.0 / frame_rate.max(1) as f32,
            accumulator: 0.0,
            max_substeps: Params::MAX_SUBSTEPS,
        }
    }

    /// Add elapsed seconds and return how many ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        // Clamp dt to prevent large jumps
        self.accumulator += elapsed.clamp(0.0, Params::MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt && ticks < self.max_substeps {
            self.accumulator -= self.tick_dt;
            ticks += 1;
        }
        // Drop the backlog rather than spiral
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }
        ticks
    }
}

/// Scores read back from the paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The right side is checked first, matching the arcade loop
    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.right >= win_score {
            Some(Side::Right)
        } else if self.left >= win_score {
            Some(Side::Left)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Paddle inputs waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<PaddleInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, input: PaddleInput) {
        self.inputs.push(input);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, PaddleInput> {
        self.inputs.drain(..)
    }
}
