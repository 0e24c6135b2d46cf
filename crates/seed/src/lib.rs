//! Seed data for the Comeback companion.
//!
//! This crate provides a trait-based seed interface with the built-in tables
//! and a JSON file implementation.

#![warn(missing_docs)]

pub mod source;
pub mod data;
pub mod builtin;
pub mod json_seed;

pub use source::{SeedSource, SeedError, Result, BuiltinSeed};
pub use data::{
    SeedData, ChatSeed, AchievementSeed, MoodSeed, MoodSuggestions, MoodHistorySeed,
    CommunitySeed, PostSeed,
};
pub use json_seed::JsonSeed;
