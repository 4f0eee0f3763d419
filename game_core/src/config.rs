use crate::{Params, Side, Surface};
use glam::Vec2;

/// Game configuration
///
/// Everything but the arena size comes straight from [`Params`]; the arena
/// follows the render surface.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_arena(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for an arena of the given size
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
        }
    }

    /// Configuration matching the size of a render surface
    pub fn for_surface<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::for_arena(surface.width(), surface.height())
    }

    /// Left edge of the paddle for the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        }
    }

    /// Highest allowed top-edge Y for a paddle
    pub fn paddle_max_y(&self) -> f32 {
        (self.arena_height - self.paddle_height).max(0.0)
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Top-edge Y that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Center of the play area, where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    pub fn ball_initial_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
