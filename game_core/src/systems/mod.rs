pub mod collision;
pub mod escape;
pub mod input;
pub mod movement;

pub use collision::*;
pub use escape::*;
pub use input::*;
pub use movement::*;
