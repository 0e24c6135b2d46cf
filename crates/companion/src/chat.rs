//! Scripted chat companion.
//!
//! Replies are resolved synchronously by the keyword resolver; the session
//! only adds the typing delay before a reply lands in the transcript.

use std::sync::Arc;
use std::time::Duration;

use comeback_core::{ChatMessage, Clock, QuickAction, QuickActionId, Sender};
use comeback_rules::KeywordResolver;
use comeback_seed::SeedData;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{CompanionError, Result};

/// How long the buddy "types" before replying: `min + uniform[0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    /// Fixed part
    pub min: Duration,
    /// Random extra, exclusive upper bound
    pub jitter: Duration,
}

impl ReplyDelay {
    /// Delay of `min_ms` plus up to `jitter_ms`.
    pub fn from_millis(min_ms: u64, jitter_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            jitter: Duration::from_millis(jitter_ms),
        }
    }

    /// Reply immediately.
    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }

    /// Draw one delay.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.min;
        }
        self.min + Duration::from_millis(rng.gen_range(0..jitter_ms))
    }
}

/// A reply that has been resolved but not yet delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Reply text
    pub text: String,
    /// How long to wait before delivering it
    pub delay: Duration,
}

/// A chat session with the scripted buddy.
pub struct ChatCompanion<R> {
    resolver: KeywordResolver,
    quick_actions: Vec<QuickAction>,
    transcript: Vec<ChatMessage>,
    delay: ReplyDelay,
    clock: Arc<dyn Clock>,
    rng: R,
    typing: bool,
}

impl<R: Rng> ChatCompanion<R> {
    /// Open a session. The transcript starts with the buddy's greeting.
    pub fn new(
        resolver: KeywordResolver,
        quick_actions: Vec<QuickAction>,
        greeting: impl Into<String>,
        delay: ReplyDelay,
        clock: Arc<dyn Clock>,
        rng: R,
    ) -> Self {
        let opened = clock.now() - chrono::Duration::minutes(5);
        Self {
            resolver,
            quick_actions,
            transcript: vec![ChatMessage::new(Sender::Buddy, greeting, opened)],
            delay,
            clock,
            rng,
            typing: false,
        }
    }

    /// Open a session from the seed's chat script and settings.
    pub fn from_seed(seed: &SeedData, clock: Arc<dyn Clock>, rng: R) -> Result<Self> {
        let resolver = seed.keyword_resolver()?;
        let delay = ReplyDelay::from_millis(
            seed.settings.reply_delay_min_ms,
            seed.settings.reply_delay_jitter_ms,
        );
        Ok(Self::new(
            resolver,
            seed.chat.quick_actions.clone(),
            seed.chat.greeting.clone(),
            delay,
            clock,
            rng,
        ))
    }

    /// Replace the reply delay.
    pub fn with_delay(mut self, delay: ReplyDelay) -> Self {
        self.delay = delay;
        self
    }

    /// Messages so far, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Available quick actions.
    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) {
        let message = ChatMessage::new(sender, text, self.clock.now());
        self.transcript.push(message);
    }

    /// Record the user's message and resolve the reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn prepare(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }

        self.push(Sender::User, text);
        let reply = self.resolver.resolve(text, &mut self.rng).to_string();
        self.typing = true;
        Some(PendingReply {
            text: reply,
            delay: self.delay.sample(&mut self.rng),
        })
    }

    /// Record a quick action's prompt and queue its fixed response.
    pub fn prepare_quick(&mut self, id: &QuickActionId) -> Result<PendingReply> {
        let action = self
            .quick_actions
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| {
                warn!("Unknown quick action: {}", id);
                CompanionError::UnknownQuickAction(id.clone())
            })?;

        self.push(Sender::User, action.text);
        self.typing = true;
        Ok(PendingReply {
            text: action.response,
            delay: self.delay.sample(&mut self.rng),
        })
    }

    /// Put a pending reply into the transcript.
    pub fn deliver(&mut self, reply: PendingReply) -> &ChatMessage {
        self.push(Sender::Buddy, reply.text);
        self.typing = false;
        // push() just appended
        &self.transcript[self.transcript.len() - 1]
    }

    /// Send a message and wait out the typing delay for the reply.
    pub async fn send(&mut self, text: &str) -> Option<ChatMessage> {
        let pending = self.prepare(text)?;
        tokio::time::sleep(pending.delay).await;
        Some(self.deliver(pending).clone())
    }

    /// Trigger a quick action and wait for its reply.
    pub async fn send_quick(&mut self, id: &QuickActionId) -> Result<ChatMessage> {
        let pending = self.prepare_quick(id)?;
        tokio::time::sleep(pending.delay).await;
        Ok(self.deliver(pending).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use comeback_core::{FixedClock, QuickActionKind, RuleEntry};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn companion(delay: ReplyDelay) -> ChatCompanion<StdRng> {
        let resolver = KeywordResolver::new(
            vec![
                RuleEntry::new(["text her", "call her"], "STOP..."),
                RuleEntry::new(["gym"], "NOW WE'RE TALKING!"),
            ],
            vec!["keep going".to_string(), "respect".to_string()],
        )
        .unwrap();
        let actions = vec![QuickAction {
            id: "need-motivation".into(),
            text: "I need motivation".to_string(),
            response: "Listen up, King.".to_string(),
            kind: QuickActionKind::Motivation,
        }];
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 2, 0, 0).unwrap()));
        ChatCompanion::new(resolver, actions, "Yo!", delay, clock, StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let chat = companion(ReplyDelay::none());
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].sender, Sender::Buddy);
        assert_eq!(chat.transcript()[0].text, "Yo!");
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut chat = companion(ReplyDelay::none());
        assert!(chat.prepare("   \n").is_none());
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_prepare_then_deliver() {
        let mut chat = companion(ReplyDelay::none());
        let pending = chat.prepare("Should I CALL HER?").unwrap();
        assert_eq!(pending.text, "STOP...");
        assert!(chat.is_typing());
        assert_eq!(chat.transcript().last().unwrap().sender, Sender::User);

        let reply = chat.deliver(pending);
        assert_eq!(reply.sender, Sender::Buddy);
        assert_eq!(reply.text, "STOP...");
        assert!(!chat.is_typing());
        assert_eq!(chat.transcript().len(), 3);
    }

    #[test]
    fn test_delay_within_bounds() {
        let delay = ReplyDelay::from_millis(1500, 1000);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let d = delay.sample(&mut rng);
            assert!(d >= Duration::from_millis(1500));
            assert!(d < Duration::from_millis(2500));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_waits_for_delay() {
        let mut chat = companion(ReplyDelay::from_millis(1500, 1000));
        let started = tokio::time::Instant::now();
        let reply = chat.send("hit the gym today").await.unwrap();
        let waited = started.elapsed();

        assert_eq!(reply.text, "NOW WE'RE TALKING!");
        assert!(waited >= Duration::from_millis(1500));
        assert!(waited < Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_reply_comes_from_pool() {
        let mut chat = companion(ReplyDelay::none());
        let reply = chat.send("hello there").await.unwrap();
        assert!(reply.text == "keep going" || reply.text == "respect");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_action() {
        let mut chat = companion(ReplyDelay::none());
        let reply = chat.send_quick(&"need-motivation".into()).await.unwrap();
        assert_eq!(reply.text, "Listen up, King.");

        let transcript = chat.transcript();
        assert_eq!(transcript[1].sender, Sender::User);
        assert_eq!(transcript[1].text, "I need motivation");

        let err = chat.send_quick(&"nope".into()).await.unwrap_err();
        assert!(matches!(err, CompanionError::UnknownQuickAction(_)));
        assert_eq!(chat.transcript().len(), 3);
    }
}
