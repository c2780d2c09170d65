//! Named, prioritized line-preprocessing stages for markdown pipelines.
//!
//! Markdown renderers commonly rewrite the raw source line-by-line before
//! block parsing (expanding directives, normalizing whitespace, injecting
//! intermediate HTML). This crate provides the plumbing for that phase:
//!
//! - [`LinePreprocessor`]: a single-operation trait for one rewrite pass over
//!   the document lines.
//! - [`PreprocessorChain`]: an ordered collection of stages, each registered
//!   under a unique name with an integer priority. Higher priorities run
//!   earlier; ties run in registration order.
//! - [`PipelineExtension`]: the entry point plugins implement so a host can
//!   load them into a chain without knowing which stages they install.
//!
//! # Example
//!
//! ```
//! use mdpipe::{LinePreprocessor, PreprocessorChain};
//!
//! struct Upcase;
//!
//! impl LinePreprocessor for Upcase {
//!     fn run(&self, lines: Vec<String>) -> Vec<String> {
//!         lines.into_iter().map(|line| line.to_uppercase()).collect()
//!     }
//! }
//!
//! let mut chain = PreprocessorChain::new();
//! chain.register("upcase", 10, Box::new(Upcase))?;
//!
//! let output = chain.run(vec!["hello".to_owned()]);
//! assert_eq!(output, vec!["HELLO".to_owned()]);
//! # Ok::<(), mdpipe::PipelineError>(())
//! ```

mod chain;
mod extension;

pub use chain::{LinePreprocessor, PipelineError, PreprocessorChain};
pub use extension::{ExtensionOptions, PipelineExtension};
