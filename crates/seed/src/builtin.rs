//! Built-in seed: the tables the companion ships with.

use comeback_core::{
    AchievementCategory, ActivityCategory, ActivitySuggestion, CompanionSettings, Difficulty,
    FeedItem, FeedKind, Mood, PostKind, QuickAction, QuickActionKind, RuleEntry, Threshold,
};

use crate::data::{
    AchievementSeed, ChatSeed, CommunitySeed, MoodHistorySeed, MoodSeed, MoodSuggestions,
    PostSeed, SeedData,
};

/// The default seed document.
pub fn seed_data() -> SeedData {
    SeedData {
        settings: CompanionSettings::default(),
        chat: chat(),
        levels: levels(),
        milestones: milestones(),
        streak_messages: streak_messages(),
        achievements: achievements(),
        moods: moods(),
        feed: feed(),
        community: community(),
    }
}

fn chat() -> ChatSeed {
    ChatSeed {
        greeting: "Yo! I'm your AI wingman. Think of me as that friend who always keeps it 100 with you. How you holding up today, King?".to_string(),
        rules: vec![
            RuleEntry::new(
                ["text her", "message her", "call her"],
                "STOP RIGHT THERE. Put the phone down. You know what happens when you text her? Nothing good. Go do 25 push-ups, drink some water, and remember why you started this journey. You're stronger than this urge.",
            ),
            RuleEntry::new(
                ["miss her", "thinking about her"],
                "Missing someone is normal, but don't let it control you. She's living her life, you should be living yours BETTER. Channel that energy into something that makes you unstoppable.",
            ),
            RuleEntry::new(
                ["social media", "instagram", "facebook"],
                "Bro... stalking her socials is like picking at a scab. It just makes it worse. Block, mute, whatever you need to do. Your mental health > her vacation pics.",
            ),
            RuleEntry::new(
                ["sad", "depressed", "down"],
                "Feeling down is part of the process, but don't set up camp there. You're not broken, you're just recalibrating. This is temporary, your growth is permanent.",
            ),
            RuleEntry::new(
                ["gym", "workout", "exercise"],
                "NOW WE'RE TALKING! The gym is your therapy session with weights. Every rep is you choosing yourself. Go show those weights who's boss!",
            ),
            RuleEntry::new(
                ["friends", "hang out", "social"],
                "Your real friends are the ones checking on you right now. Lean on them, but also be the friend you'd want to have. Good energy attracts good people.",
            ),
        ],
        fallback: [
            "You're asking the right questions, that's growth right there.",
            "Real talk - you're handling this better than most people would.",
            "I see you working on yourself. That's some king energy right there.",
            "Plot twist: the best revenge is becoming the person you were meant to be.",
            "She lost a good one. Her loss, your gain. Keep that energy up.",
            "You know what's attractive? A man who knows his worth. That's you right now.",
            "Every day you don't text her is another day you're choosing yourself. Respect.",
            "You're not healing, you're UPGRADING. There's a difference.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        quick_actions: vec![
            QuickAction {
                id: "want-to-text".into(),
                text: "I want to text her".to_string(),
                response: "Bro... if you text her at 2am, you'll regret it by 9am. Put the phone down and go do 20 push-ups. Your future self will thank you. Trust me on this one.".to_string(),
                kind: QuickActionKind::Emergency,
            },
            QuickAction {
                id: "feeling-lonely".into(),
                text: "I'm feeling lonely".to_string(),
                response: "Loneliness hits different at night, I get it. But remember - you're not alone, you're just learning to enjoy your own company. Call a friend, watch something funny, or hit me up. We got this.".to_string(),
                kind: QuickActionKind::Emergency,
            },
            QuickAction {
                id: "need-motivation".into(),
                text: "I need motivation".to_string(),
                response: "Listen up, King. You're not the same person who got hurt. Every day you choose yourself is another day you're becoming unstoppable. You're literally leveling up while she's... well, who cares what she's doing?".to_string(),
                kind: QuickActionKind::Motivation,
            },
            QuickAction {
                id: "what-to-do".into(),
                text: "What should I do?".to_string(),
                response: "Perfect timing! Here's what we're gonna do: 1) Hit the gym (endorphins > her), 2) Learn something new (knowledge is power), 3) Call your boys (real ones support you). Pick one and crush it.".to_string(),
                kind: QuickActionKind::Activity,
            },
        ],
    }
}

fn levels() -> Vec<Threshold> {
    vec![
        Threshold::new(0, "Sad Boy", "Everyone starts somewhere. You're taking the first step."),
        Threshold::new(100, "Healing Warrior", "You're fighting the good fight. Keep pushing forward."),
        Threshold::new(300, "Healing King", "You're mastering the art of moving on. Respect."),
        Threshold::new(600, "Unstoppable", "You're not just healed, you're THRIVING. Absolute legend."),
    ]
}

fn milestones() -> Vec<Threshold> {
    vec![
        Threshold::new(1, "First Day", "You did it! Day one is always the hardest. Keep going, King!"),
        Threshold::new(3, "3 Day Warrior", "Three days strong! The urge to text is fading. You're building mental muscle!"),
        Threshold::new(7, "Week Champion", "One whole week! You're officially in beast mode. That's some serious self-control!"),
        Threshold::new(14, "Two Week Legend", "Two weeks of pure strength! You're not the same person who started this journey."),
        Threshold::new(30, "Monthly Master", "30 DAYS! You absolute legend! You've officially leveled up your life!"),
        Threshold::new(60, "Unstoppable Force", "60 days of pure discipline! You're not just healing, you're THRIVING!"),
    ]
}

fn streak_messages() -> Vec<Threshold> {
    vec![
        Threshold::new(0, "day-zero", "Your journey starts now. You've got this!"),
        Threshold::new(1, "first-days", "Every hour counts. Stay strong!"),
        Threshold::new(3, "momentum", "You're building unstoppable momentum!"),
        Threshold::new(7, "legend", "Look at you go! Absolute legend!"),
        Threshold::new(30, "dominating", "You're not just healing, you're DOMINATING!"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn achievement(
    id: &str,
    title: &str,
    description: &str,
    xp_reward: u64,
    category: AchievementCategory,
    progress: u32,
    target: u32,
    unlocked_days_ago: Option<i64>,
) -> AchievementSeed {
    AchievementSeed {
        id: id.into(),
        title: title.to_string(),
        description: description.to_string(),
        xp_reward,
        category,
        progress,
        target,
        unlocked_days_ago,
    }
}

fn achievements() -> Vec<AchievementSeed> {
    use AchievementCategory as C;
    vec![
        achievement("first-day", "First Day Strong", "Completed your first day of no contact", 25, C::NoContact, 1, 1, Some(20)),
        achievement("week-warrior", "Week Warrior", "7 days of no contact - you're building serious discipline", 50, C::NoContact, 7, 7, Some(15)),
        achievement("no-stalking", "Digital Detox King", "Didn't check her social media for 7 days straight", 75, C::NoContact, 7, 7, Some(10)),
        achievement("mood-tracker", "Self-Aware Legend", "Tracked your mood for 7 consecutive days", 40, C::Mood, 7, 7, Some(5)),
        achievement("gym-beast", "Gym Beast", "Completed 10 workout activities", 60, C::Activity, 7, 10, None),
        achievement("knowledge-seeker", "Knowledge Seeker", "Completed 5 learning activities", 45, C::Activity, 3, 5, None),
        achievement("social-butterfly", "Social Butterfly", "Hung out with friends 5 times this month", 55, C::Social, 2, 5, None),
        achievement("month-master", "Monthly Master", "30 days of no contact - absolute legend status", 100, C::Milestone, 23, 30, None),
    ]
}

fn activity(
    id: &str,
    title: &str,
    description: &str,
    category: ActivityCategory,
    duration: &str,
    difficulty: Difficulty,
) -> ActivitySuggestion {
    ActivitySuggestion {
        id: id.into(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        duration: duration.to_string(),
        difficulty,
    }
}

fn moods() -> MoodSeed {
    use ActivityCategory::*;
    use Difficulty::*;
    MoodSeed {
        suggestions: vec![
            MoodSuggestions {
                mood: Mood::Terrible,
                activities: vec![
                    activity("call-a-friend", "Call a Friend", "Reach out to someone who cares about you", Social, "15-30 min", Easy),
                    activity("journal", "Journal Your Feelings", "Write down what you're going through", Mental, "10-20 min", Easy),
                    activity("walk", "Take a Walk", "Fresh air and movement can help", Physical, "20-30 min", Easy),
                ],
            },
            MoodSuggestions {
                mood: Mood::Sad,
                activities: vec![
                    activity("music", "Listen to Music", "Put on your favorite playlist", Creative, "30-60 min", Easy),
                    activity("light-workout", "Light Workout", "Get those endorphins flowing", Physical, "20-45 min", Medium),
                    activity("meditation", "Meditation", "Center yourself with mindfulness", Mental, "10-15 min", Easy),
                ],
            },
            MoodSuggestions {
                mood: Mood::Okay,
                activities: vec![
                    activity("gym", "Hit the Gym", "Channel that energy into gains", Physical, "45-90 min", Medium),
                    activity("learn", "Learn Something New", "Invest in yourself with a skill", Mental, "30-60 min", Medium),
                    activity("meet-friends", "Meet Up with Friends", "Social connection boosts mood", Social, "2-4 hours", Easy),
                ],
            },
            MoodSuggestions {
                mood: Mood::Good,
                activities: vec![
                    activity("intense-workout", "Intense Workout", "Push your limits and feel unstoppable", Physical, "60-90 min", Hard),
                    activity("plan-future", "Plan Your Future", "Set goals and make action plans", Mental, "30-60 min", Medium),
                    activity("try-new", "Try Something New", "Step out of your comfort zone", Creative, "1-3 hours", Medium),
                ],
            },
            MoodSuggestions {
                mood: Mood::Amazing,
                activities: vec![
                    activity("beast-mode", "Beast Mode Workout", "You're unstoppable - show the world!", Physical, "90+ min", Hard),
                    activity("help-others", "Help Others", "Share your positive energy", Social, "2+ hours", Medium),
                    activity("create", "Create Something", "Channel this energy into creation", Creative, "1-4 hours", Medium),
                ],
            },
        ],
        history: vec![
            MoodHistorySeed {
                mood: Mood::Good,
                days_ago: 1,
                activities: vec!["gym".to_string(), "journaling".to_string()],
            },
            MoodHistorySeed {
                mood: Mood::Okay,
                days_ago: 2,
                activities: vec!["walk".to_string()],
            },
            MoodHistorySeed {
                mood: Mood::Amazing,
                days_ago: 3,
                activities: vec!["workout".to_string(), "friends".to_string()],
            },
        ],
    }
}

fn feed_item(
    id: &str,
    kind: FeedKind,
    content: &str,
    author: Option<&str>,
    category: &str,
    likes: u32,
    liked: bool,
) -> FeedItem {
    FeedItem {
        id: id.into(),
        kind,
        content: content.to_string(),
        author: author.map(str::to_string),
        category: category.to_string(),
        likes,
        liked,
    }
}

fn feed() -> Vec<FeedItem> {
    vec![
        feed_item("1", FeedKind::Quote, "The best revenge is massive success. Keep building yourself, King.", Some("Frank Sinatra"), "Motivation", 1247, false),
        feed_item("2", FeedKind::Meme, "When she says 'we can still be friends' but you're already planning your glow-up montage", None, "Humor", 892, true),
        feed_item("3", FeedKind::Affirmation, "I am worthy of love. I am growing stronger every day. My future is brighter than my past.", None, "Self-Love", 2156, false),
        feed_item("4", FeedKind::Quote, "Don't cry because it's over. Smile because you dodged a bullet.", None, "Perspective", 743, false),
        feed_item("5", FeedKind::Meme, "POV: You realize you can eat whatever you want for dinner now without asking anyone", None, "Freedom", 1534, false),
        feed_item("6", FeedKind::Affirmation, "Every day I choose myself. Every day I become unstoppable. This is my comeback story.", None, "Empowerment", 987, true),
    ]
}

fn community() -> CommunitySeed {
    CommunitySeed {
        anonymous_names: [
            "KingInProgress",
            "HealingWarrior",
            "PhoenixRising",
            "StrongSilently",
            "BetterEveryDay",
            "UnstoppableForce",
            "RisingFromAshes",
            "GrowthMindset",
            "FreedomSeeker",
            "LevelingUp",
            "SelfLoveKing",
            "MovingForward",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        avatars: [
            "bg-primary",
            "bg-secondary",
            "bg-accent",
            "bg-green-500",
            "bg-blue-500",
            "bg-purple-500",
            "bg-pink-500",
            "bg-yellow-500",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        posts: vec![
            PostSeed {
                author: "HealingWarrior".to_string(),
                avatar: "bg-primary".to_string(),
                content: "Day 45 no contact! Finally hit the gym consistently for 2 weeks straight. Feeling stronger mentally and physically. To anyone just starting - it gets easier, I promise.".to_string(),
                kind: PostKind::Progress,
                likes: 127,
                comments: 23,
                liked: false,
                minutes_ago: 60,
                streak: Some(45),
                level: Some("Healing King".to_string()),
            },
            PostSeed {
                author: "PhoenixRising".to_string(),
                avatar: "bg-secondary".to_string(),
                content: "She texted me yesterday asking to 'talk.' I read it, took a deep breath, and deleted it without responding. Then I went for a run. Small wins, but they add up!".to_string(),
                kind: PostKind::Win,
                likes: 89,
                comments: 15,
                liked: true,
                minutes_ago: 120,
                streak: None,
                level: None,
            },
            PostSeed {
                author: "UnstoppableForce".to_string(),
                avatar: "bg-green-500".to_string(),
                content: "POV: You realize you can watch whatever you want on Netflix without someone complaining about your 'terrible taste' in movies. Freedom hits different 😂".to_string(),
                kind: PostKind::Meme,
                likes: 156,
                comments: 31,
                liked: false,
                minutes_ago: 180,
                streak: None,
                level: None,
            },
            PostSeed {
                author: "GrowthMindset".to_string(),
                avatar: "bg-purple-500".to_string(),
                content: "Pro tip: When you feel the urge to check her social media, do 10 push-ups instead. I'm now accidentally jacked because I used to be a serial stalker. Win-win!".to_string(),
                kind: PostKind::Advice,
                likes: 203,
                comments: 42,
                liked: true,
                minutes_ago: 240,
                streak: None,
                level: None,
            },
            PostSeed {
                author: "SelfLoveKing".to_string(),
                avatar: "bg-blue-500".to_string(),
                content: "Rough day today. Saw her at the coffee shop with someone new. Not gonna lie, it stung. But I ordered my drink, smiled at the barista, and walked out with my head high. Progress isn't always linear.".to_string(),
                kind: PostKind::Support,
                likes: 78,
                comments: 19,
                liked: false,
                minutes_ago: 300,
                streak: None,
                level: None,
            },
        ],
    }
}
