/// Game tuning parameters for Pong
///
/// Distances are canvas pixels, speeds are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (used when no surface size is known)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Rendering
    pub const FOREGROUND: &str = "white";
}
