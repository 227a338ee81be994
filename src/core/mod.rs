pub mod echo;
pub mod engine;
pub mod harness;
pub mod pipeline;
pub mod rewriter;

pub use crate::domain::model::{ProxyRequest, ProxyResponse, RewriteResult};
pub use crate::domain::ports::{ConfigProvider, Handler, Pipeline, Storage};
pub use crate::utils::error::Result;
