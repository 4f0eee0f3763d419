use crate::{Ball, Config, Events, Side};
use hecs::World;

/// Re-serve the ball if it left the arena past either end
pub fn check_escape(world: &mut World, config: &Config, events: &mut Events) {
    let center = config.ball_spawn();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let escaped = if ball.pos.x < 0.0 {
            Some(Side::Left)
        } else if ball.pos.x > config.arena_width {
            Some(Side::Right)
        } else {
            None
        };

        if let Some(side) = escaped {
            ball.reset(center);
            events.ball_reset = Some(side);
        }
    }
}
