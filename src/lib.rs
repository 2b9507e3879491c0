pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ScrapeEngine, pipeline::LeaguePipeline};
pub use utils::error::{LigaError, Result};
