//! Healing feed carousel.

use comeback_core::{toggle_like, FeedItem};
use tracing::debug;

/// Cyclic carousel over feed cards.
#[derive(Debug, Clone)]
pub struct HealingFeed {
    items: Vec<FeedItem>,
    index: usize,
}

impl HealingFeed {
    /// Carousel focused on the first card.
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self { items, index: 0 }
    }

    /// All cards in order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Position of the focused card.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed has no cards.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Focused card, `None` only when the feed is empty.
    pub fn current(&self) -> Option<&FeedItem> {
        self.items.get(self.index)
    }

    /// Advance, wrapping past the last card.
    pub fn next(&mut self) -> Option<&FeedItem> {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
            debug!("Feed moved to card {}", self.index);
        }
        self.current()
    }

    /// Go back, wrapping before the first card.
    pub fn previous(&mut self) -> Option<&FeedItem> {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
            debug!("Feed moved to card {}", self.index);
        }
        self.current()
    }

    /// Flip the like on the focused card.
    pub fn toggle_like(&mut self) -> Option<&FeedItem> {
        let item = self.items.get_mut(self.index)?;
        toggle_like(&mut item.liked, &mut item.likes);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> HealingFeed {
        HealingFeed::new(comeback_seed::builtin::seed_data().feed)
    }

    #[test]
    fn test_next_wraps() {
        let mut feed = feed();
        let len = feed.len();
        assert_eq!(feed.current().unwrap().id.as_str(), "1");
        for _ in 0..len {
            feed.next();
        }
        assert_eq!(feed.position(), 0);
        assert_eq!(feed.next().unwrap().id.as_str(), "2");
    }

    #[test]
    fn test_previous_wraps() {
        let mut feed = feed();
        let last = feed.items().last().unwrap().id.clone();
        assert_eq!(feed.previous().unwrap().id, last);
        assert_eq!(feed.position(), feed.len() - 1);
    }

    #[test]
    fn test_toggle_like_on_current() {
        let mut feed = feed();
        let second_likes = feed.items()[1].likes;
        let before = feed.current().unwrap().likes;

        let item = feed.toggle_like().unwrap();
        assert!(item.liked);
        assert_eq!(item.likes, before + 1);
        let item = feed.toggle_like().unwrap();
        assert!(!item.liked);
        assert_eq!(item.likes, before);

        // Already liked in the seed
        let item = feed.next().unwrap();
        assert!(item.liked);
        let item = feed.toggle_like().unwrap();
        assert!(!item.liked);
        assert_eq!(item.likes, second_likes - 1);
    }

    #[test]
    fn test_empty_feed() {
        let mut feed = HealingFeed::new(Vec::new());
        assert!(feed.is_empty());
        assert!(feed.next().is_none());
        assert!(feed.previous().is_none());
        assert!(feed.toggle_like().is_none());
    }
}
