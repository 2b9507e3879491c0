use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching league page...");
        let text = self.pipeline.extract().await?;
        tracing::info!("Extracted {} characters of page text", text.len());

        tracing::info!("Computing standings...");
        let result = self.pipeline.transform(text).await?;
        tracing::info!(
            "{} matches with score, {} teams, {} rounds",
            result.matches.len(),
            result.standings.len(),
            result.rounds.len()
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
