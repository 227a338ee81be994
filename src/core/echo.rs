use crate::domain::model::{ProxyRequest, ProxyResponse};
use crate::domain::ports::Handler;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Echoes back the request's body. The beginning of dynamic behavior.
///
/// ```text
/// $ curl -d "echo? echo? echo..." localhost:5000/echo
/// echo? echo? echo...
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, request: ProxyRequest) -> Result<ProxyResponse> {
        let mut response = ProxyResponse::new();
        response.body = request.body;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_body_verbatim() {
        let handler = EchoHandler;
        let request = ProxyRequest::new("POST", "/echo").with_body("echo? echo? echo...");
        let response = handler.handle(request).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "echo? echo? echo...");
    }

    #[tokio::test]
    async fn test_empty_body_stays_empty() {
        let handler = EchoHandler;
        let request = ProxyRequest::new("POST", "/echo");
        let response = handler.handle(request).await.unwrap();

        assert_eq!(response.body, "");
    }
}
