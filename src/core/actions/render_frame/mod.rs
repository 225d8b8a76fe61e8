//! Fractal compute engine: partitioned, parallel whole-frame rendering.

pub mod errors;
pub mod render_pool;
pub mod render_rows;

pub use errors::RenderPoolError;
pub use render_pool::{MandelbrotRenderPool, RenderPool};
