//! Extension loading for the preprocessor chain.
//!
//! Plugins bundle one or more stages behind [`PipelineExtension`] so a host
//! can load them without knowing what they install. Hosts pass arbitrary
//! named options at load time; extensions that define no options keep them
//! unread.

use serde_json::{Map, Value};

use crate::chain::{PipelineError, PreprocessorChain};

/// Arbitrary named configuration passed to an extension at load time.
pub type ExtensionOptions = Map<String, Value>;

/// A plugin that installs stages into a [`PreprocessorChain`].
///
/// The chain's [`with_extension`](PreprocessorChain::with_extension) is the
/// loader call; `extend` is invoked once per load and performs whatever
/// registrations the plugin needs.
pub trait PipelineExtension {
    /// Install this extension's stages into the chain.
    fn extend(&self, chain: &mut PreprocessorChain) -> Result<(), PipelineError>;
}
