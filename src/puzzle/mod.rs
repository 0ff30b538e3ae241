pub mod noise;
pub mod placer;

pub use noise::NoiseStyle;
pub use placer::{Placer, TrialSource, DEFAULT_MAX_ATTEMPTS};
