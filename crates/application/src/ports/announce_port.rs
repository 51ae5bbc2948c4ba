//! Announcement port
//!
//! Defines the interface for playing a spoken announcement on a
//! radio-link node.

use async_trait::async_trait;
use domain::NodeId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for announcing text on a radio-link node
///
/// A call covers the full connection lifecycle of the management
/// service: connect, authenticate, issue the command, disconnect.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnnouncePort: Send + Sync {
    /// Play the given text on the given node
    async fn announce(&self, node: &NodeId, text: &str) -> Result<(), ApplicationError>;
}
