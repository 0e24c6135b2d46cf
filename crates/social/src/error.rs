//! Social errors.

use comeback_core::PostId;

/// Error type for social operations.
pub type Result<T> = std::result::Result<T, SocialError>;

/// Errors raised by the feed and the wall.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocialError {
    /// No post with this id
    #[error("Post not found: {0}")]
    UnknownPost(PostId),
}
