//! Ordered chain of named line-preprocessing stages.

use std::cmp::Reverse;

use crate::extension::PipelineExtension;

/// A single line-preprocessing stage.
///
/// A stage receives the full ordered sequence of document lines for one pass
/// and returns the replacement sequence. Stages hold no per-document state;
/// the chain may be shared across worker threads rendering independent
/// documents, so implementations must be [`Send`].
pub trait LinePreprocessor: Send {
    /// Transform the document lines for one pass.
    fn run(&self, lines: Vec<String>) -> Vec<String>;
}

/// Error from chain registration.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A stage with this name is already registered.
    #[error("preprocessor stage \"{0}\" is already registered")]
    DuplicateStage(String),
}

/// A stage together with its registration name and priority.
struct RegisteredStage {
    name: String,
    priority: i32,
    stage: Box<dyn LinePreprocessor>,
}

/// Ordered collection of named line-preprocessing stages.
///
/// Stages are registered under a unique name with an `i32` priority and run
/// in priority order: **higher values execute earlier**. Stages with equal
/// priority run in registration order. Each stage receives the previous
/// stage's output; an empty chain is the identity function.
///
/// # Example
///
/// ```
/// use mdpipe::{LinePreprocessor, PreprocessorChain};
///
/// struct Strip;
///
/// impl LinePreprocessor for Strip {
///     fn run(&self, lines: Vec<String>) -> Vec<String> {
///         lines.into_iter().map(|line| line.trim_end().to_owned()).collect()
///     }
/// }
///
/// let mut chain = PreprocessorChain::new();
/// chain.register("strip", 30, Box::new(Strip))?;
/// assert!(chain.contains("strip"));
///
/// let output = chain.run(vec!["trailing space   ".to_owned()]);
/// assert_eq!(output, vec!["trailing space".to_owned()]);
/// # Ok::<(), mdpipe::PipelineError>(())
/// ```
#[derive(Default)]
pub struct PreprocessorChain {
    /// Stages in registration order; execution order is derived on run.
    stages: Vec<RegisteredStage>,
}

impl PreprocessorChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage under a unique name with the given priority.
    ///
    /// Higher priorities run earlier. Returns
    /// [`PipelineError::DuplicateStage`] if a stage with the same name is
    /// already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        priority: i32,
        stage: Box<dyn LinePreprocessor>,
    ) -> Result<(), PipelineError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(PipelineError::DuplicateStage(name));
        }
        self.stages.push(RegisteredStage {
            name,
            priority,
            stage,
        });
        Ok(())
    }

    /// Load an extension, letting it install its stages into the chain.
    pub fn with_extension(mut self, extension: &dyn PipelineExtension) -> Result<Self, PipelineError> {
        extension.extend(&mut self)?;
        Ok(self)
    }

    /// Remove a stage by name, returning it if it was registered.
    pub fn deregister(&mut self, name: &str) -> Option<Box<dyn LinePreprocessor>> {
        let idx = self.stages.iter().position(|s| s.name == name)?;
        Some(self.stages.remove(idx).stage)
    }

    /// Check whether a stage with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.stages.iter().any(|s| s.name == name)
    }

    /// Number of registered stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check whether the chain has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.execution_order()
            .into_iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Run every stage over the lines, in priority order.
    #[must_use]
    pub fn run(&self, mut lines: Vec<String>) -> Vec<String> {
        for stage in self.execution_order() {
            tracing::trace!(
                stage = %stage.name,
                priority = stage.priority,
                "running line preprocessor"
            );
            lines = stage.stage.run(lines);
        }
        lines
    }

    /// Stages sorted by descending priority; the sort is stable, so equal
    /// priorities keep registration order.
    fn execution_order(&self) -> Vec<&RegisteredStage> {
        let mut order: Vec<&RegisteredStage> = self.stages.iter().collect();
        order.sort_by_key(|s| Reverse(s.priority));
        order
    }
}
