//! Trailing-backslash hard breaks for [`mdpipe`] pipelines.
//!
//! Markdown collapses single newlines into soft breaks, so authors have no
//! plain-text way to force a line break mid-paragraph. This extension gives
//! them one: end the line with a backslash.
//!
//! ```markdown
//! roses are red\
//! violets are blue
//! ```
//!
//! The preprocessor rewrites each line ending in a backslash by dropping the
//! backslash and appending a literal `<br>`, which passes through CommonMark
//! parsing as inline HTML. All other lines are untouched.
//!
//! # Usage
//!
//! ```
//! use mdpipe::PreprocessorChain;
//! use mdpipe_hardbreak::HardBreakExtension;
//!
//! let chain = PreprocessorChain::new()
//!     .with_extension(&HardBreakExtension::new())?;
//!
//! let output = chain.run(vec![
//!     "roses are red\\".to_owned(),
//!     "violets are blue".to_owned(),
//! ]);
//! assert_eq!(output, vec!["roses are red<br>", "violets are blue"]);
//! # Ok::<(), mdpipe::PipelineError>(())
//! ```

mod extension;
mod preprocessor;

pub use extension::{HARD_BREAK_PRIORITY, HARD_BREAK_STAGE, HardBreakExtension};
pub use preprocessor::{HARD_BREAK_MARKER, HardBreakPreprocessor};
