use crate::domain::model::{ProxyRequest, ProxyResponse, RewriteResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_suffix(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, source: String) -> Result<RewriteResult>;
    async fn load(&self, result: RewriteResult) -> Result<String>;
}

/// Proxy endpoint handler, as registered with the test harness.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, request: ProxyRequest) -> Result<ProxyResponse>;
}
