pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::BggClient;
pub use config::CliConfig;
pub use core::{decode_xml, plays_per_game, thing_stats, DateWindow, DecodeOptions, Normalizer};
pub use domain::model::{GameAggregate, PlayRecord, Stat, ThingStats};
pub use utils::error::{GatewayError, Result};
