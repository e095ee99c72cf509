//! Document filter for `[yuml` blocks.
//!
//! This module provides [`YumlFilter`], which scans a document for blocks,
//! validates their header options and replaces each block with an image
//! reference to the yUML service.

use crate::block::{Block, Scan, next_block};
use crate::consts::DEFAULT_SERVICE_URL;
use crate::content::collect_lines;
use crate::options::{OptionSet, Validated};
use crate::problem::{Problem, ProblemSink};
use crate::render::render_markup;

/// What happens to a block whose options failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InvalidBlocks {
    /// Drop the block's source text from the output (default).
    #[default]
    Remove,
    /// Leave the block's source text in the output unchanged.
    Keep,
}

/// Result of filtering a document with [`YumlFilter::filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutput {
    /// Document with blocks replaced.
    pub text: String,
    /// Problems found, in document order.
    pub problems: Vec<Problem>,
}

/// Filter that replaces `[yuml` blocks with yUML image references.
///
/// A block opens with a line starting with `[yuml`, optionally followed by
/// `key:value` options, and closes at the next line starting with `]`:
///
/// ```text
/// [yuml diagram:class style:scruffy
/// [Customer]->[Order]
/// ]
/// ```
///
/// Each block becomes `<img src="<service-url>/diagram/<style>;dir:<dir>;scale:<scale>/<diagram>/<lines>" />`.
///
/// # Configuration
///
/// Create the filter with the service URL, then configure using builder methods:
/// - [`invalid_blocks`](Self::invalid_blocks): Keep or remove blocks with invalid options
///
/// # Example
///
/// ```
/// use yuml_filter::YumlFilter;
///
/// let filter = YumlFilter::new("http://yuml.me");
/// let output = filter.filter("Intro\n[yuml diagram:class\n[A]->[B]\n]\nOutro");
///
/// assert_eq!(
///     output.text,
///     "Intro\n<img src=\"http://yuml.me/diagram/plain;dir:LR;scale:100/class/[A]->[B]\" />\nOutro"
/// );
/// assert!(output.problems.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct YumlFilter {
    /// Base URL of the yUML service.
    service_url: String,
    /// Handling of blocks with invalid options.
    invalid_blocks: InvalidBlocks,
}

impl Default for YumlFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_URL)
    }
}

impl YumlFilter {
    /// Create a new filter with the given yUML service URL.
    ///
    /// # Arguments
    ///
    /// * `service_url` - yUML service base URL (e.g., `"http://yuml.me"`)
    #[must_use]
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            invalid_blocks: InvalidBlocks::default(),
        }
    }

    /// Set how blocks with invalid options are handled.
    ///
    /// Default is [`InvalidBlocks::Remove`].
    ///
    /// # Example
    ///
    /// ```
    /// use yuml_filter::{InvalidBlocks, YumlFilter};
    ///
    /// let filter = YumlFilter::default().invalid_blocks(InvalidBlocks::Keep);
    /// let output = filter.filter("\n[yuml style:plain\n[A]\n]");
    ///
    /// assert_eq!(output.text, "\n[yuml style:plain\n[A]\n]");
    /// assert_eq!(output.problems.len(), 1);
    /// ```
    #[must_use]
    pub fn invalid_blocks(mut self, policy: InvalidBlocks) -> Self {
        self.invalid_blocks = policy;
        self
    }

    /// Configured yUML service URL.
    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Filter a document, collecting problems into the returned output.
    #[must_use]
    pub fn filter(&self, text: &str) -> FilterOutput {
        let mut problems = Vec::new();
        let text = self.process(text, &mut problems);
        FilterOutput { text, problems }
    }

    /// Filter a document, reporting problems to `sink`.
    ///
    /// Blocks are processed front to back. Text outside blocks is copied
    /// unchanged. A start token without a terminator stops the pass: the
    /// remainder of the document, from the text before that token on, is
    /// copied verbatim.
    pub fn process(&self, text: &str, sink: &mut impl ProblemSink) -> String {
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut rendered = 0usize;

        while let Some(scan) = next_block(text, cursor) {
            let block = match scan {
                Scan::Block(block) => block,
                Scan::Unterminated(offset) => {
                    tracing::warn!(offset, "Unterminated [yuml block, leaving remainder as-is");
                    sink.report(Problem::MalformedBlock { offset });
                    break;
                }
            };

            output.push_str(&text[cursor..block.span.start]);
            cursor = block.span.end;

            if block.span.is_empty() {
                continue;
            }

            if let Some(markup) = self.render_block(&block, sink) {
                output.push_str(&markup);
                rendered += 1;
            } else if self.invalid_blocks == InvalidBlocks::Keep {
                output.push_str(&text[block.span.clone()]);
            }
        }

        output.push_str(&text[cursor..]);
        tracing::debug!(rendered, "yUML pass completed");
        output
    }

    /// Render one block, or return None when its options are invalid.
    fn render_block(&self, block: &Block<'_>, sink: &mut impl ProblemSink) -> Option<String> {
        let offset = block.span.start;

        let Validated::Complete(options) =
            OptionSet::parse_header(block.header(), sink).validate(sink)
        else {
            tracing::debug!(offset, policy = ?self.invalid_blocks, "Skipped invalid yUML block");
            return None;
        };

        let lines = collect_lines(block.body_lines());
        tracing::debug!(
            offset,
            diagram = options.get("diagram").unwrap_or_default(),
            lines = lines.len(),
            "Rendered yUML block"
        );

        Some(render_markup(&self.service_url, &options, &lines))
    }
}
