//! Frame drawing against an abstract 2D surface

use crate::{Ball, Config, Paddle, Params};
use hecs::World;

/// A 2D drawable area, e.g. an HTML canvas context
///
/// Colors are CSS color strings.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
}

/// Clear the surface and draw both paddles and the ball
pub fn draw_frame<S: Surface + ?Sized>(world: &World, config: &Config, surface: &mut S) {
    surface.clear();

    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        surface.fill_rect(
            config.paddle_x(paddle.side),
            paddle.y,
            config.paddle_width,
            config.paddle_height,
            Params::FOREGROUND,
        );
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, Params::FOREGROUND);
    }
}
