mod animator;
mod component;
mod render;
mod state;
mod types;

pub use animator::{AnimationHandle, start};
pub use component::BlockchainBackground;
pub use render::Surface;
pub use state::{Link, ParticleField};
pub use types::{FieldConfig, FieldError, Node, PALETTE};
