use crate::core::rewriter::MetaTagRewriter;
use crate::domain::model::RewriteResult;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Templatize as extract/transform/load: read the admin page, rewrite the
/// environment meta tags, write the `.template` sibling. The source file
/// is never modified.
pub struct TemplatizePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rewriter: MetaTagRewriter,
}

impl<S: Storage, C: ConfigProvider> TemplatizePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            rewriter: MetaTagRewriter::new(),
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TemplatizePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let data = self.storage.read_file(self.config.input_path()).await?;
        let source = String::from_utf8(data)?;
        Ok(source)
    }

    async fn transform(&self, source: String) -> Result<RewriteResult> {
        let result = self.rewriter.rewrite(&source);
        if result.replacements == 0 {
            tracing::warn!(
                "No environment meta tag found in {}",
                self.config.input_path()
            );
        } else {
            tracing::debug!(
                "Rewrote {} meta tag(s) in {}",
                result.replacements,
                self.config.input_path()
            );
        }
        Ok(result)
    }

    async fn load(&self, result: RewriteResult) -> Result<String> {
        let output_path = format!(
            "{}{}",
            self.config.input_path(),
            self.config.output_suffix()
        );
        self.storage
            .write_file(&output_path, result.output.as_bytes())
            .await?;
        Ok(output_path)
    }
}
