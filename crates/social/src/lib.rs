//! Social features: the healing feed carousel and the community wall.

#![warn(missing_docs)]

pub mod error;
pub mod feed;
pub mod wall;

pub use error::{SocialError, Result};
pub use feed::HealingFeed;
pub use wall::{CommunityWall, time_ago};
