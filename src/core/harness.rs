use crate::domain::model::{ProxyRequest, ProxyResponse};
use crate::domain::ports::Handler;
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;

/// Minimal in-process stand-in for the gateway's proxy endpoint router:
/// handlers are registered under a path and invoked one request at a time.
#[derive(Default)]
pub struct ProxyHarness {
    routes: HashMap<String, Box<dyn Handler>>,
}

impl ProxyHarness {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn register(&mut self, route: impl Into<String>, handler: impl Handler + 'static) {
        let route = route.into();
        tracing::debug!("Registering handler for {}", route);
        self.routes.insert(route, Box::new(handler));
    }

    pub async fn dispatch(&self, request: ProxyRequest) -> Result<ProxyResponse> {
        let handler =
            self.routes
                .get(&request.path)
                .ok_or_else(|| GatewayError::RouteNotFound {
                    route: request.path.clone(),
                })?;

        tracing::debug!("Dispatching {} {}", request.method, request.path);
        handler.handle(request).await
    }
}
