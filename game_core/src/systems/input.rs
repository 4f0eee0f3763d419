use crate::{InputState, Paddle, PaddleIntent};
use hecs::World;

/// Copy the requested paddle speeds onto the paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.speed = input.speed(paddle.side);
    }
}
