pub mod aggregate;
pub mod decode;
pub mod normalize;
pub mod stats;

pub use aggregate::{plays_per_game, DateWindow};
pub use decode::{decode_xml, DecodeOptions};
pub use normalize::{Normalizer, NormalizerOptions};
pub use stats::thing_stats;
