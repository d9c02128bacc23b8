pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::Engine, pipeline::DocPipeline};
pub use crate::utils::error::{DocError, Result};
