//! Community wall.
//!
//! Posts are anonymous: new ones get a handle and an avatar color drawn from
//! the seeded pools.

use std::sync::Arc;

use comeback_core::{toggle_like, Clock, CommunityPost, PostId, PostKind, Time};
use comeback_seed::SeedData;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{Result, SocialError};

const FALLBACK_NAME: &str = "Anonymous";
const FALLBACK_AVATAR: &str = "bg-primary";

/// Relative age of `timestamp` as of `now`: `"5m ago"`, `"3h ago"`, `"2d ago"`.
///
/// Timestamps in the future count as zero minutes old.
pub fn time_ago(timestamp: Time, now: Time) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

/// Anonymous posts, newest first.
pub struct CommunityWall<R> {
    posts: Vec<CommunityPost>,
    names: Vec<String>,
    avatars: Vec<String>,
    clock: Arc<dyn Clock>,
    rng: R,
}

impl<R: Rng> CommunityWall<R> {
    /// Wall with the given posts and handle pools.
    pub fn new(
        posts: Vec<CommunityPost>,
        names: Vec<String>,
        avatars: Vec<String>,
        clock: Arc<dyn Clock>,
        rng: R,
    ) -> Self {
        Self {
            posts,
            names,
            avatars,
            clock,
            rng,
        }
    }

    /// Wall with the seed's pools and starting posts.
    pub fn from_seed(seed: &SeedData, clock: Arc<dyn Clock>, rng: R) -> Self {
        let posts = seed.posts_at(clock.now());
        Self::new(
            posts,
            seed.community.anonymous_names.clone(),
            seed.community.avatars.clone(),
            clock,
            rng,
        )
    }

    /// Posts, newest first.
    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    /// Look up a post.
    pub fn get(&self, id: &PostId) -> Option<&CommunityPost> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Flip the like on a post.
    pub fn toggle_like(&mut self, id: &PostId) -> Result<&CommunityPost> {
        let Some(post) = self.posts.iter_mut().find(|p| &p.id == id) else {
            warn!("Like on unknown post {}", id);
            return Err(SocialError::UnknownPost(*id));
        };
        toggle_like(&mut post.liked, &mut post.likes);
        debug!("Post {} now has {} likes", post.id, post.likes);
        Ok(post)
    }

    /// Publish a post under a random handle. Blank content is ignored.
    pub fn create_post(&mut self, content: &str, kind: PostKind) -> Option<&CommunityPost> {
        let content = content.trim();
        if content.is_empty() {
            debug!("Ignoring blank post");
            return None;
        }

        let author = self
            .names
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_NAME)
            .to_string();
        let avatar = self
            .avatars
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_AVATAR)
            .to_string();

        let post = CommunityPost {
            id: PostId::new(),
            author,
            avatar,
            content: content.to_string(),
            kind,
            likes: 0,
            comments: 0,
            liked: false,
            timestamp: self.clock.now(),
            streak: None,
            level: None,
        };
        info!("{} posted a {} update", post.author, kind.as_str());
        self.posts.insert(0, post);
        self.posts.first()
    }

    /// Age of a post as of now.
    pub fn age_of(&self, post: &CommunityPost) -> String {
        time_ago(post.timestamp, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use comeback_core::FixedClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> Time {
        Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
    }

    fn wall() -> CommunityWall<StdRng> {
        let seed = comeback_seed::builtin::seed_data();
        CommunityWall::from_seed(&seed, Arc::new(FixedClock::new(now())), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(now, now), "0m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(time_ago(now - Duration::minutes(1439), now), "23h ago");
        assert_eq!(time_ago(now - Duration::minutes(1440), now), "1d ago");
        assert_eq!(time_ago(now - Duration::days(9), now), "9d ago");
        assert_eq!(time_ago(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn test_seeded_posts_newest_first() {
        let wall = wall();
        let ages: Vec<String> = wall.posts().iter().map(|p| wall.age_of(p)).collect();
        assert_eq!(ages, vec!["1h ago", "2h ago", "3h ago", "4h ago", "5h ago"]);
    }

    #[test]
    fn test_toggle_like() {
        let mut wall = wall();
        let id = wall.posts()[0].id;
        let likes = wall.posts()[0].likes;

        let post = wall.toggle_like(&id).unwrap();
        assert!(post.liked);
        assert_eq!(post.likes, likes + 1);

        let missing = PostId::new();
        assert_eq!(wall.toggle_like(&missing).unwrap_err(), SocialError::UnknownPost(missing));
    }

    #[test]
    fn test_create_post() {
        let mut wall = wall();
        let seed = comeback_seed::builtin::seed_data();

        assert!(wall.create_post("   ", PostKind::Win).is_none());
        assert_eq!(wall.posts().len(), 5);

        let post = wall.create_post("  30 days strong  ", PostKind::Win).unwrap().clone();
        assert_eq!(post.content, "30 days strong");
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert!(!post.liked);
        assert_eq!(post.timestamp, now());
        assert!(seed.community.anonymous_names.contains(&post.author));
        assert!(seed.community.avatars.contains(&post.avatar));
        assert_eq!(wall.posts()[0].id, post.id);
        assert_eq!(wall.posts().len(), 6);
    }

    #[test]
    fn test_empty_pools_fall_back() {
        let clock = Arc::new(FixedClock::new(now()));
        let mut wall = CommunityWall::new(Vec::new(), Vec::new(), Vec::new(), clock, StdRng::seed_from_u64(1));
        let post = wall.create_post("hello", PostKind::Support).unwrap();
        assert_eq!(post.author, FALLBACK_NAME);
        assert_eq!(post.avatar, FALLBACK_AVATAR);
    }
}
