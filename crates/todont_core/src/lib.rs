pub mod bingo;
pub mod config;
pub mod engine;
pub mod error;
pub mod excuses;
pub mod leaderboard;
pub mod messages;
pub mod model;
pub mod notify;
pub mod shop;
pub mod sound;
pub mod storage;
pub mod task_api;
