use crate::Side;

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_reset: Option<Side>, // Side the ball escaped past
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_reset = None;
    }

    pub fn is_empty(&self) -> bool {
        !self.ball_hit_wall && self.ball_hit_paddle.is_none() && self.ball_reset.is_none()
    }
}

/// Paddle speeds requested by the keyboard, read once per step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub left_speed: f32,
    pub right_speed: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_speed,
            Side::Right => self.right_speed,
        }
    }

    pub fn set_speed(&mut self, side: Side, speed: f32) {
        match side {
            Side::Left => self.left_speed = speed,
            Side::Right => self.right_speed = speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = Some(Side::Left);
        events.ball_reset = Some(Side::Right);
        assert!(!events.is_empty());

        events.clear();

        assert!(!events.ball_hit_wall);
        assert_eq!(events.ball_hit_paddle, None);
        assert_eq!(events.ball_reset, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_input_state_per_side() {
        let mut input = InputState::new();
        input.set_speed(Side::Left, -5.0);
        input.set_speed(Side::Right, 5.0);

        assert_eq!(input.speed(Side::Left), -5.0);
        assert_eq!(input.speed(Side::Right), 5.0);

        input.set_speed(Side::Left, 0.0);
        assert_eq!(input.left_speed, 0.0);
        assert_eq!(input.right_speed, 5.0, "Other side untouched");
    }
}
