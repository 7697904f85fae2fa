pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    codec::SequenceFormat,
    engine::MoverEngine,
    mover::{move_zeros, move_zeros_in_place, Strategy},
    pipeline::ZeroMovePipeline,
};
pub use domain::model::{MoveReport, Sequence};
pub use utils::error::{MoverError, Result};
