//! Comeback CLI - breakup recovery companion.
//!
//! Every invocation starts from the seed document; nothing is persisted
//! between runs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use comeback_companion::{ChatCompanion, MoodJournal, ReplyDelay};
use comeback_core::{
    ActivityId, Clock, CounterId, FixedClock, Mood, PostKind, QuickActionId, SystemClock, Time,
};
use comeback_progress::{AchievementBook, StreakTimer, StreakWatcher, RECOMPUTE_PERIOD};
use comeback_seed::{BuiltinSeed, JsonSeed, SeedData, SeedSource};
use comeback_social::{CommunityWall, HealingFeed};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "comeback")]
#[command(about = "Breakup recovery companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load the seed from a JSON file instead of the built-in tables
    #[arg(long, global = true)]
    seed_file: Option<PathBuf>,

    /// Seed the random generator for reproducible replies and handles
    #[arg(long, global = true)]
    rng_seed: Option<u64>,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(long, global = true, value_parser = parse_time)]
    now: Option<Time>,

    /// Reply immediately instead of simulating typing
    #[arg(long, global = true)]
    no_delay: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show streak, level and mood at a glance
    Status,
    /// Talk to your buddy
    Chat {
        /// What to say
        message: Option<String>,
        /// Trigger a quick action by id instead
        #[arg(long, conflicts_with = "message")]
        quick: Option<String>,
    },
    /// Resolve the level for an XP amount
    Level {
        /// XP total
        xp: u64,
    },
    /// Show the no-contact streak
    Streak {
        /// Streak start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Keep running and report the streak every hour until Ctrl+C
        #[arg(long)]
        watch: bool,
    },
    /// List achievements, optionally recording progress first
    Achievements {
        /// Achievement id to record progress on
        #[arg(long, requires = "delta")]
        record: Option<String>,
        /// Progress to add (negative to take back)
        #[arg(long, allow_hyphen_values = true)]
        delta: Option<i64>,
    },
    /// Mood journal
    Mood {
        #[command(subcommand)]
        command: MoodCommands,
    },
    /// Browse the healing feed
    Feed {
        /// Cards to skip forward
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Like the card you land on
        #[arg(long)]
        like: bool,
    },
    /// Community wall
    Wall {
        /// Post something anonymously
        #[arg(long)]
        post: Option<String>,
        /// Kind of post
        #[arg(long, default_value = "progress")]
        kind: PostKind,
    },
    /// Seed document tools
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
}

#[derive(Subcommand)]
enum MoodCommands {
    /// Check in with today's mood
    Log {
        /// terrible, sad, okay, good or amazing
        mood: Mood,
        /// Mark a suggested activity done
        #[arg(long)]
        activity: Option<String>,
    },
    /// Show activities suggested for a mood
    Suggest {
        /// terrible, sad, okay, good or amazing
        mood: Mood,
    },
    /// Show recent check-ins and the trend
    History,
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Write the active seed to a JSON file
    Export {
        /// Output path
        path: PathBuf,
    },
}

fn parse_time(s: &str) -> std::result::Result<Time, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|t| t.with_timezone(&Utc))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_seed(path: Option<&PathBuf>) -> Result<SeedData> {
    match path {
        Some(path) => JsonSeed::new(path)
            .load()
            .await
            .with_context(|| format!("Failed to load seed from {}", path.display())),
        None => Ok(BuiltinSeed.load().await?),
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 10.0).round() as usize).min(10);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

fn streak_timer(seed: &SeedData, start: Time, clock: Arc<dyn Clock>) -> Result<StreakTimer> {
    Ok(StreakTimer::new(
        start,
        clock,
        seed.milestone_table()?,
        seed.message_table()?,
    ))
}

fn achievement_book(seed: &SeedData, clock: Arc<dyn Clock>) -> Result<AchievementBook> {
    let achievements = seed.achievements_at(clock.now());
    Ok(AchievementBook::new(
        achievements,
        seed.level_table()?,
        seed.settings.starting_xp,
        clock,
    )?)
}

fn print_achievements(book: &AchievementBook) {
    println!("Achievements ({}/{} unlocked)", book.unlocked().len(), book.achievements().len());
    for achievement in book.achievements() {
        let mark = if achievement.is_unlocked() { "x" } else { " " };
        println!(
            "  [{}] {} ({}) {}/{} +{} XP - {}",
            mark,
            achievement.title,
            achievement.category.as_str(),
            achievement.counter.current,
            achievement.counter.target,
            achievement.xp_reward,
            achievement.description,
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clock: Arc<dyn Clock> = match cli.now {
        Some(now) => Arc::new(FixedClock::new(now)),
        None => Arc::new(SystemClock),
    };
    let rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let seed = load_seed(cli.seed_file.as_ref()).await?;
    debug!("Seed loaded, clock at {}", clock.now());

    match cli.command {
        Commands::Status => {
            let timer = streak_timer(&seed, seed.streak_start(), clock.clone())?;
            let book = achievement_book(&seed, clock.clone())?;
            let journal = MoodJournal::from_seed(&seed, clock.clone());
            let level = book.level_status();

            println!("Comeback Status");
            println!("  Streak: {} days no contact", timer.elapsed_days());
            println!("  {}", timer.motivation());
            match level.next {
                Some(next) => println!(
                    "  Level: {} ({} XP, {} to {})",
                    level.current.label, book.xp(), level.remaining, next.label
                ),
                None => println!("  Level: {} ({} XP, max level)", level.current.label, book.xp()),
            }
            println!(
                "  Achievements: {}/{} unlocked",
                book.unlocked().len(),
                book.achievements().len()
            );
            let trend = journal.trend();
            println!("  Mood trend: {:?} - {}", trend, trend.message());
        }
        Commands::Chat { message, quick } => {
            let mut companion = ChatCompanion::from_seed(&seed, clock.clone(), rng)?;
            if cli.no_delay {
                companion = companion.with_delay(ReplyDelay::none());
            }

            let reply = match (message, quick) {
                (_, Some(id)) => Some(companion.send_quick(&QuickActionId::from(id)).await?),
                (Some(message), None) => companion.send(&message).await,
                (None, None) => {
                    println!("Buddy: {}", companion.transcript()[0].text);
                    println!();
                    println!("Quick actions:");
                    for action in companion.quick_actions() {
                        println!("  {} - {}", action.id, action.text);
                    }
                    return Ok(());
                }
            };

            match reply {
                Some(reply) => println!("Buddy: {}", reply.text),
                None => info!("Nothing to send"),
            }
        }
        Commands::Level { xp } => {
            let levels = seed.level_table()?;
            let status = levels.level_progress(xp);
            println!("{} XP: {}", xp, status.current.label);
            match status.next {
                Some(next) => println!(
                    "  {} {:.0}% - {} XP to {}",
                    progress_bar(status.percent),
                    status.percent,
                    status.remaining,
                    next.label
                ),
                None => println!("  {} max level", progress_bar(status.percent)),
            }
        }
        Commands::Streak { start, watch } => {
            let start = match start {
                Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
                None => seed.streak_start(),
            };
            let mut timer = streak_timer(&seed, start, clock.clone())?;
            let tick = timer.tick();
            let b = tick.breakdown;

            println!("{} days no contact (since {})", b.days, start.date_naive());
            println!(
                "  {} weeks {} days | {} hours | {} minutes",
                b.weeks, b.remaining_days, b.total_hours, b.total_minutes
            );
            println!("  {}", timer.motivation());
            if let Some(milestone) = tick.celebration {
                println!("  Milestone today: {} ({})", milestone.label, milestone.payload);
            }
            println!("Milestones:");
            for status in timer.milestones() {
                let mark = if status.achieved { "x" } else { " " };
                println!(
                    "  [{}] {:>3} days  {}",
                    mark, status.threshold.value, status.threshold.label
                );
            }
            if let Some(next) = timer.next_milestone() {
                println!("Next: {} in {} days", next.label, next.value - b.days);
            }

            if watch {
                let (watcher, mut ticks) = StreakWatcher::spawn(timer, RECOMPUTE_PERIOD);
                // The first tick repeats what was just printed
                ticks.recv().await;
                loop {
                    tokio::select! {
                        tick = ticks.recv() => {
                            let Some(tick) = tick else { break };
                            println!("{} days no contact", tick.breakdown.days);
                            if let Some(milestone) = tick.celebration {
                                println!("  Milestone today: {} ({})", milestone.label, milestone.payload);
                            }
                        }
                        _ = tokio::signal::ctrl_c() => {
                            info!("Stopping streak watcher");
                            break;
                        }
                    }
                }
                watcher.stop();
            }
        }
        Commands::Achievements { record, delta } => {
            let mut book = achievement_book(&seed, clock.clone())?;
            if let (Some(id), Some(delta)) = (record, delta) {
                let update = book.record(&CounterId::from(id), delta)?;
                let counter = &update.achievement.counter;
                println!(
                    "{}: {}/{}",
                    update.achievement.title, counter.current, counter.target
                );
                if update.unlocked {
                    println!("  Unlocked! +{} XP", update.xp_awarded);
                }
                if let Some(level) = update.level_up {
                    println!("  Level up: {}", level.label);
                }
                println!();
            }
            print_achievements(&book);
            println!("Total XP: {} ({})", book.xp(), book.level().label);
        }
        Commands::Mood { command } => {
            let mut journal = MoodJournal::from_seed(&seed, clock.clone());
            match command {
                MoodCommands::Log { mood, activity } => {
                    journal.log(mood);
                    println!("Logged {} {}", mood.emoji(), mood.label());
                    if let Some(id) = activity {
                        let done = journal.complete_activity(&ActivityId::from(id))?;
                        println!("  Done: {}", done.title);
                    }
                    let trend = journal.trend();
                    println!("  Trend: {:?} - {}", trend, trend.message());
                }
                MoodCommands::Suggest { mood } => {
                    println!("Suggestions for {} {}", mood.emoji(), mood.label());
                    for a in journal.suggestions_for(mood) {
                        println!(
                            "  {} - {} ({:?}, {}, {:?})",
                            a.id, a.title, a.category, a.duration, a.difficulty
                        );
                        println!("      {}", a.description);
                    }
                }
                MoodCommands::History => {
                    println!("Recent check-ins");
                    for entry in journal.history() {
                        println!(
                            "  {} {} {}",
                            entry.timestamp.date_naive(),
                            entry.mood.emoji(),
                            entry.mood.label()
                        );
                    }
                    let trend = journal.trend();
                    println!("Trend: {:?} - {}", trend, trend.message());
                }
            }
        }
        Commands::Feed { skip, like } => {
            let mut feed = HealingFeed::new(seed.feed.clone());
            for _ in 0..skip {
                feed.next();
            }
            if like {
                feed.toggle_like();
            }
            let item = feed
                .current()
                .ok_or_else(|| anyhow!("The feed is empty"))?;

            println!("[{}/{}] {:?} - {}", feed.position() + 1, feed.len(), item.kind, item.category);
            println!("  {}", item.content);
            if let Some(author) = &item.author {
                println!("  - {}", author);
            }
            let heart = if item.liked { "liked" } else { "not liked" };
            println!("  {} likes ({})", item.likes, heart);
        }
        Commands::Wall { post, kind } => {
            let mut wall = CommunityWall::from_seed(&seed, clock.clone(), rng);
            if let Some(content) = post {
                if wall.create_post(&content, kind).is_none() {
                    info!("Nothing to post");
                }
            }
            for post in wall.posts() {
                let mut tags = vec![post.kind.as_str().to_string()];
                if let Some(streak) = post.streak {
                    tags.push(format!("{} days", streak));
                }
                if let Some(level) = &post.level {
                    tags.push(level.clone());
                }
                println!("{} · {} · {}", post.author, wall.age_of(post), tags.join(" · "));
                println!("  {}", post.content);
                println!("  {} likes, {} comments", post.likes, post.comments);
            }
        }
        Commands::Seed { command } => match command {
            SeedCommands::Export { path } => {
                JsonSeed::export(&path, &seed)
                    .await
                    .with_context(|| format!("Failed to export seed to {}", path.display()))?;
                println!("Seed written to {}", path.display());
            }
        },
    }

    Ok(())
}
