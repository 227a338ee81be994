use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request object shape shared with the proxy test harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl ProxyRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Response object shape shared with the proxy test harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl ProxyResponse {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            headers: HashMap::new(),
            body: String::new(),
        }
    }
}

impl Default for ProxyResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of the rewrite stage: the transformed text plus how many
/// meta tags were replaced.
#[derive(Debug, Clone)]
pub struct RewriteResult {
    pub output: String,
    pub replacements: usize,
}
