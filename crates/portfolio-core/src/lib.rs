pub mod color;
pub mod constants;
pub mod field;
pub mod input;
pub mod lifecycle;
pub mod particle;
pub mod scene;
pub mod scroll;
pub mod surface;
pub mod waves;

pub use color::*;
pub use constants::*;
pub use field::*;
pub use input::*;
pub use lifecycle::*;
pub use particle::*;
pub use scene::*;
pub use scroll::*;
pub use surface::*;
pub use waves::*;
