use crate::domain::model::ScrapeResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Output sink for the rendered files. The pipeline only ever writes.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn league_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn round_keyword(&self) -> &str;
    fn bye_marker(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch the league page and reduce it to visible text.
    async fn extract(&self) -> Result<String>;
    /// Parse matches and derive standings and round groups.
    async fn transform(&self, text: String) -> Result<ScrapeResult>;
    /// Render and persist the outputs; returns the output location.
    async fn load(&self, result: ScrapeResult) -> Result<String>;
}
