//! Healing feed and community wall model.

use crate::id::{FeedItemId, PostId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// Kind of feed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// Quotation, usually attributed
    Quote,
    /// Joke
    Meme,
    /// Positive self-statement
    Affirmation,
}

/// A card in the healing feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Item key
    pub id: FeedItemId,

    /// Card kind
    pub kind: FeedKind,

    /// Card text
    pub content: String,

    /// Attribution, for quotes
    #[serde(default)]
    pub author: Option<String>,

    /// Topic, e.g. "Motivation"
    pub category: String,

    /// Like count
    pub likes: u32,

    /// Whether the user liked it
    #[serde(default)]
    pub liked: bool,
}

/// Kind of community post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Streak or recovery update
    Progress,
    /// Small victory
    Win,
    /// Something funny
    Meme,
    /// Tips for others
    Advice,
    /// Asking for or offering support
    Support,
}

impl PostKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Progress => "progress",
            PostKind::Win => "win",
            PostKind::Meme => "meme",
            PostKind::Advice => "advice",
            PostKind::Support => "support",
        }
    }
}

impl std::str::FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "progress" => Ok(PostKind::Progress),
            "win" => Ok(PostKind::Win),
            "meme" => Ok(PostKind::Meme),
            "advice" => Ok(PostKind::Advice),
            "support" => Ok(PostKind::Support),
            other => Err(format!("Unknown post kind: {}", other)),
        }
    }
}

/// An anonymous post on the community wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    /// Unique identifier
    pub id: PostId,

    /// Anonymous handle
    pub author: String,

    /// Avatar color token
    pub avatar: String,

    /// Post body
    pub content: String,

    /// Post kind
    pub kind: PostKind,

    /// Like count
    pub likes: u32,

    /// Comment count
    pub comments: u32,

    /// Whether the user liked it
    pub liked: bool,

    /// When it was posted
    pub timestamp: Time,

    /// Author's no-contact streak, if shared
    #[serde(default)]
    pub streak: Option<u32>,

    /// Author's level name, if shared
    #[serde(default)]
    pub level: Option<String>,
}

/// Flip a like flag and move the count with it.
pub fn toggle_like(liked: &mut bool, likes: &mut u32) {
    if *liked {
        *likes = likes.saturating_sub(1);
    } else {
        *likes += 1;
    }
    *liked = !*liked;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_round_trip() {
        let mut liked = false;
        let mut likes = 10;
        toggle_like(&mut liked, &mut likes);
        assert!(liked);
        assert_eq!(likes, 11);
        toggle_like(&mut liked, &mut likes);
        assert!(!liked);
        assert_eq!(likes, 10);
    }

    #[test]
    fn test_post_kind_parse() {
        assert_eq!("WIN".parse::<PostKind>().unwrap(), PostKind::Win);
        assert!("rant".parse::<PostKind>().is_err());
    }
}
