//! Process-wide default node
//!
//! Nothing is constructed implicitly. The application builds a [`SnowNode`]
//! at startup and hands it to [`install`]; the free functions here then
//! allocate from it.
//!
//! ```no_run
//! use snownode::{global, SnowNode, SnowNodeConfig};
//!
//! let node = SnowNode::new(SnowNodeConfig::builder().node(3).build())?;
//! global::install(node).ok();
//! let id = global::generate()?;
//! # Ok::<(), snownode::SnowNodeError>(())
//! ```

use once_cell::sync::OnceCell;

use crate::error::SnowNodeError;
use crate::id::SnowID;
use crate::node::SnowNode;

static DEFAULT_NODE: OnceCell<SnowNode> = OnceCell::new();

/// Install the default node.
///
/// Only the first call succeeds; later calls hand their node back as `Err`.
pub fn install(node: SnowNode) -> Result<&'static SnowNode, SnowNode> {
    DEFAULT_NODE.try_insert(node).map_err(|(_, node)| node)
}

/// The default node, if installed
pub fn default_node() -> Option<&'static SnowNode> {
    DEFAULT_NODE.get()
}

fn installed() -> Result<&'static SnowNode, SnowNodeError> {
    DEFAULT_NODE.get().ok_or(SnowNodeError::NotInstalled)
}

/// Generate from the default node
pub fn generate() -> Result<SnowID, SnowNodeError> {
    installed()?.generate()
}

/// Generate from the default node, panicking on failure or when none is installed
pub fn must_generate() -> SnowID {
    generate().unwrap_or_else(|err| panic!("{err}"))
}

/// Reserve `step` consecutive steps from the default node
pub fn alloc(step: u64) -> Result<SnowID, SnowNodeError> {
    installed()?.alloc(step)
}

/// Reserve from the default node, panicking on failure or when none is installed
pub fn must_alloc(step: u64) -> SnowID {
    alloc(step).unwrap_or_else(|err| panic!("{err}"))
}
