pub mod cli;

use crate::core::ConfigProvider;
use crate::core::parser::{DEFAULT_BYE_MARKER, DEFAULT_ROUND_KEYWORD};
use crate::utils::error::Result;
use crate::utils::validation::{validate_nonempty, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

const DEFAULT_LEAGUE_URL: &str =
    "https://www.ligavistahermosaf7.futbol/index.php?op=GRUPO&idcomp=227";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "liga-table")]
#[command(about = "Scrape a league standings page and compute the table")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_LEAGUE_URL)]
    pub league_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_ROUND_KEYWORD,
          help = "Word that introduces a round header line")]
    pub round_keyword: String,

    #[arg(long, default_value = DEFAULT_BYE_MARKER,
          help = "Marker on lines for teams with no fixture")]
    pub bye_marker: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn league_url(&self) -> &str {
        &self.league_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn round_keyword(&self) -> &str {
        &self.round_keyword
    }

    fn bye_marker(&self) -> &str {
        &self.bye_marker
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("league_url", &self.league_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_nonempty("round_keyword", &self.round_keyword)?;
        validate_nonempty("bye_marker", &self.bye_marker)?;
        Ok(())
    }
}
