pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig, ResolvedConfig};
pub use core::{
    echo::EchoHandler, engine::TemplatizeEngine, harness::ProxyHarness,
    pipeline::TemplatizePipeline, rewriter::MetaTagRewriter,
};
pub use domain::model::{ProxyRequest, ProxyResponse, RewriteResult};
pub use utils::error::{GatewayError, Result};
