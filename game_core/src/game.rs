use crate::{
    create_ball, create_paddle, draw_frame, step, Ball, Config, Events, InputState, KeyBindings,
    Paddle, Side, Surface,
};
use glam::Vec2;
use hecs::World;
use log::{debug, info};

/// The whole game: simulation state plus the keyboard state feeding it
pub struct Game {
    pub world: World,
    pub config: Config,
    pub input: InputState,
    pub bindings: KeyBindings,
    pub events: Events,
    pub frame: u64,
}

impl Game {
    /// Centered paddles and a centered ball with the initial serve velocity
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        let paddle_y = config.paddle_spawn_y();
        for side in Side::ALL {
            create_paddle(&mut world, side, paddle_y);
        }
        create_ball(&mut world, config.ball_spawn(), config.ball_initial_velocity());

        info!(
            "Game created: arena {}x{}",
            config.arena_width, config.arena_height
        );

        Self {
            world,
            config,
            input: InputState::new(),
            bindings: KeyBindings::new(),
            events: Events::new(),
            frame: 0,
        }
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input
            .key_down(&self.bindings, key, self.config.paddle_speed)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(&self.bindings, key)
    }

    /// Advance one frame
    pub fn step(&mut self) {
        step(&mut self.world, &self.config, &self.input, &mut self.events);
        self.frame += 1;
        self.log_events();
    }

    /// One display refresh: step the simulation, then draw it
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.world, &self.config, surface);
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = self.config.clamp_paddle_y(y);
            }
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    fn log_events(&self) {
        if self.events.ball_hit_wall {
            debug!("frame {}: ball hit wall", self.frame);
        }
        if let Some(side) = self.events.ball_hit_paddle {
            debug!("frame {}: ball hit {:?} paddle", self.frame, side);
        }
        if let Some(side) = self.events.ball_reset {
            debug!("frame {}: ball escaped {:?}, re-serving", self.frame, side);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
