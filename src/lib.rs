pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod feeds;
pub mod lifecycle;
pub mod state;
