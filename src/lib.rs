//! Core library exports for the Blossom planner service.
//!
//! This crate exposes the domain, forms, models, repositories, routes and
//! service layers used by the Blossom planner web application.

pub mod auth;
pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Sticker palette offered to the calendar UI.
pub const AVAILABLE_STICKERS: [&str; 20] = [
    "🎉", "⭐", "❤️", "🔥", "💪", "🎯", "✨", "🌟", "💖", "🎈", "🏆", "🎨", "📚", "☕", "🌈", "🦄",
    "🌸", "🍕", "🎮", "🎵",
];

/// Upper bound on stickers attached to a single (owner, date) pair.
pub const MAX_STICKERS_PER_DAY: usize = 10;
