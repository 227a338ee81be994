use crate::domain::model::RewriteResult;
use regex::{Captures, Regex};

/// The admin UI marks its environment configuration with this exact tag.
/// Matching is case-sensitive and makes no allowance for attribute
/// reordering or whitespace variants.
pub const META_TAG_PATTERN: &str =
    r#"<meta name="(gateway/config/environment)" content="([^"]*)" />"#;

pub struct MetaTagRewriter {
    pattern: Regex,
}

impl MetaTagRewriter {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(META_TAG_PATTERN).unwrap(),
        }
    }

    /// Replaces every occurrence of the environment meta tag with a
    /// version placeholder followed by the same tag, its content attribute
    /// wrapped in a replacePath expression. Text outside the matches is
    /// left untouched.
    pub fn rewrite(&self, source: &str) -> RewriteResult {
        let mut replacements = 0;
        let output = self
            .pattern
            .replace_all(source, |caps: &Captures| {
                replacements += 1;
                render_block(&caps[1], &caps[2])
            })
            .into_owned();

        RewriteResult {
            output,
            replacements,
        }
    }
}

impl Default for MetaTagRewriter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(name: &str, value: &str) -> String {
    format!(
        "    {{{{version}}}}\n  \n    <meta name=\"{}\" content=\"{{{{replacePath {}}}}}\" />\n",
        name,
        quote_literal(value)
    )
}

/// Re-emits the captured content value as a double-quoted literal so the
/// later templating stage sees a string argument.
fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_is_rewritten() {
        let rewriter = MetaTagRewriter::new();
        let source =
            "<meta name=\"gateway/config/environment\" content=\"/admin\" />";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 1);
        assert_eq!(
            result.output,
            "    {{version}}\n  \n    <meta name=\"gateway/config/environment\" content=\"{{replacePath \"/admin\"}}\" />\n"
        );
    }

    #[test]
    fn test_surrounding_text_is_preserved() {
        let rewriter = MetaTagRewriter::new();
        let source = "<head>\n  <meta name=\"gateway/config/environment\" content=\"/admin\" />\n</head>\n";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 1);
        assert!(result.output.starts_with("<head>\n  "));
        assert!(result.output.ends_with(" />\n\n</head>\n"));
        assert!(result.output.contains("{{version}}"));
        assert!(result
            .output
            .contains("content=\"{{replacePath \"/admin\"}}\""));
    }

    #[test]
    fn test_no_match_returns_input_unchanged() {
        let rewriter = MetaTagRewriter::new();
        let source = "<html><body>no meta tags here</body></html>";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 0);
        assert_eq!(result.output, source);
    }

    #[test]
    fn test_multiple_tags_are_each_rewritten() {
        let rewriter = MetaTagRewriter::new();
        let tag = "<meta name=\"gateway/config/environment\" content=\"/a\" />";
        let source = format!("{}\nmiddle\n{}", tag, tag);
        let result = rewriter.rewrite(&source);

        assert_eq!(result.replacements, 2);
        assert_eq!(result.output.matches("{{version}}").count(), 2);
        assert_eq!(
            result.output.matches("{{replacePath \"/a\"}}").count(),
            2
        );
        assert!(result.output.contains("middle"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rewriter = MetaTagRewriter::new();
        let source =
            "<META name=\"gateway/config/environment\" content=\"/admin\" />";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 0);
        assert_eq!(result.output, source);
    }

    #[test]
    fn test_attribute_reordering_is_not_matched() {
        let rewriter = MetaTagRewriter::new();
        let source =
            "<meta content=\"/admin\" name=\"gateway/config/environment\" />";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 0);
        assert_eq!(result.output, source);
    }

    #[test]
    fn test_empty_content_value() {
        let rewriter = MetaTagRewriter::new();
        let source = "<meta name=\"gateway/config/environment\" content=\"\" />";
        let result = rewriter.rewrite(source);

        assert_eq!(result.replacements, 1);
        assert!(result.output.contains("{{replacePath \"\"}}"));
    }

    #[test]
    fn test_quote_literal_escapes_backslashes() {
        assert_eq!(quote_literal("/admin"), "\"/admin\"");
        assert_eq!(quote_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_literal(""), "\"\"");
    }
}
