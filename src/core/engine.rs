use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct TemplatizeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TemplatizeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting templatize process...");

        // Extract
        println!("Reading source file...");
        let source = self.pipeline.extract().await?;
        println!("Read {} bytes", source.len());

        // Transform
        println!("Rewriting meta tags...");
        let result = self.pipeline.transform(source).await?;
        println!("Replaced {} meta tag(s)", result.replacements);

        // Load
        println!("Writing template...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
