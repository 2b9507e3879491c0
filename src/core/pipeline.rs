use crate::core::{page, parser::MatchParser, render, rounds, standings};
use crate::core::{ConfigProvider, LigaError, Pipeline, Result, ScrapeResult, Storage};
use reqwest::Client;

const USER_AGENT: &str = "Mozilla/5.0 (LigaTable/1.0)";

pub const STANDINGS_FILE: &str = "standings.csv";
pub const MATCHES_FILE: &str = "matches.json";
pub const REPORT_FILE: &str = "report.html";

pub struct LeaguePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> LeaguePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeaguePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Fetching league page: {}", self.config.league_url());
        let response = self
            .client
            .get(self.config.league_url())
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("League page response status: {}", status);
        if !status.is_success() {
            return Err(LigaError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        Ok(page::visible_text(&html))
    }

    async fn transform(&self, text: String) -> Result<ScrapeResult> {
        let parser = MatchParser::new(self.config.round_keyword(), self.config.bye_marker());
        let matches = parser.parse(&text);
        tracing::debug!("Parsed {} matches with score", matches.len());

        let standings = standings::compute_standings(&matches);
        let rounds = rounds::group_by_round(&matches);

        Ok(ScrapeResult {
            matches,
            standings,
            rounds,
        })
    }

    async fn load(&self, result: ScrapeResult) -> Result<String> {
        let csv_data = {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            for row in &result.standings {
                wtr.serialize(row)?;
            }
            wtr.into_inner().map_err(|e| LigaError::ProcessingError {
                message: format!("CSV buffer error: {}", e),
            })?
        };
        self.storage.write_file(STANDINGS_FILE, &csv_data).await?;

        let json_data = serde_json::to_vec_pretty(&result.matches)?;
        self.storage.write_file(MATCHES_FILE, &json_data).await?;

        let report = render::render_report(&result.standings, &result.rounds);
        self.storage
            .write_file(REPORT_FILE, report.as_bytes())
            .await?;

        tracing::debug!(
            "Wrote {}, {} and {} to {}",
            STANDINGS_FILE,
            MATCHES_FILE,
            REPORT_FILE,
            self.config.output_path()
        );
        Ok(self.config.output_path().to_string())
    }
}
