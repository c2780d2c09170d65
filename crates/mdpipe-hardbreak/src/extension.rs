//! Extension wrapper for loading the hard-break stage into a chain.

use mdpipe::{ExtensionOptions, PipelineError, PipelineExtension, PreprocessorChain};

use crate::preprocessor::HardBreakPreprocessor;

/// Registration name of the hard-break stage.
pub const HARD_BREAK_STAGE: &str = "hard_break";

/// Registration priority of the hard-break stage.
///
/// Higher priorities run earlier. This value must exceed the priority of the
/// host's standard line-processing stage: the trailing backslash has to be
/// consumed before later stages get a chance to alter or swallow it.
pub const HARD_BREAK_PRIORITY: i32 = 25;

/// Extension that installs [`HardBreakPreprocessor`] into a chain.
///
/// Registers the stage under [`HARD_BREAK_STAGE`] at [`HARD_BREAK_PRIORITY`].
/// Loading the extension into the same chain twice fails with
/// [`PipelineError::DuplicateStage`].
#[derive(Debug, Default)]
pub struct HardBreakExtension {
    options: ExtensionOptions,
}

impl HardBreakExtension {
    /// Create the extension with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the extension with host-supplied options.
    ///
    /// The extension defines no options of its own; whatever the host passes
    /// is retained for introspection but never consumed.
    #[must_use]
    pub fn with_options(options: ExtensionOptions) -> Self {
        Self { options }
    }

    /// Options the host supplied at load time.
    #[must_use]
    pub fn options(&self) -> &ExtensionOptions {
        &self.options
    }
}

impl PipelineExtension for HardBreakExtension {
    fn extend(&self, chain: &mut PreprocessorChain) -> Result<(), PipelineError> {
        chain.register(
            HARD_BREAK_STAGE,
            HARD_BREAK_PRIORITY,
            Box::new(HardBreakPreprocessor::new()),
        )
    }
}
