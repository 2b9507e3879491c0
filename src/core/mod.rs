pub mod engine;
pub mod page;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod rounds;
pub mod standings;

pub use crate::domain::model::{Match, RoundGroup, ScrapeResult, TeamRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::{LigaError, Result};
