mod json;
pub use json::*;
mod rng;
pub use rng::*;
mod stats;
pub use stats::*;
