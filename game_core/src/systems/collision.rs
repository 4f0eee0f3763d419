use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Checks use the ball center only and never move the ball back inside, so a
/// fast ball can skip past a paddle or sit past a wall for one frame.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom wall bounce
        if ball.pos.y <= 0.0 || ball.pos.y >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for &(side, paddle_y) in &paddles {
            if hits_paddle(ball, side, paddle_y, config) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = Some(side);
            }
        }
    }
}

/// Ball center at or beyond the paddle plane and within the paddle span
fn hits_paddle(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let at_plane = match side {
        Side::Left => ball.pos.x <= config.paddle_width,
        Side::Right => ball.pos.x >= config.arena_width - config.paddle_width,
    };
    at_plane && ball.pos.y >= paddle_y && ball.pos.y <= paddle_y + config.paddle_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let ball = *query.iter().next().unwrap().1;
        ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, -1.0), Vec2::new(5.0, -3.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, 3.0), "Only Y velocity flips");
        assert_eq!(ball.pos.y, -1.0, "Position is not corrected");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_when_touching_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 600.0), Vec2::new(5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.y, -3.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_inside_arena() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(5.0, 3.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(8.0, 260.0), Vec2::new(-5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(5.0, 3.0));
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 100.0);
        create_ball(&mut world, Vec2::new(790.0, 200.0), Vec2::new(5.0, -3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(-5.0, -3.0));
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_paddle_span_edges_are_inclusive() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(10.0, 350.0), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, 5.0, "Bottom edge of span counts");
    }

    #[test]
    fn test_ball_misses_paddle_outside_span() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(5.0, 351.0), Vec2::new(-5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, -5.0, "Ball below paddle passes");
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_in_span_but_short_of_paddle_plane() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 250.0);
        create_ball(&mut world, Vec2::new(789.0, 300.0), Vec2::new(5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, 5.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_corner_hit_flips_both_axes() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 0.0);
        create_ball(&mut world, Vec2::new(4.0, 0.0), Vec2::new(-5.0, -3.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, Vec2::new(5.0, 3.0));
        assert!(events.ball_hit_wall);
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);

        // Should not panic or error
        check_collisions(&mut world, &config, &mut events);

        assert!(events.is_empty());
    }
}
