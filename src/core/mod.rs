pub mod config;
pub mod engine;
pub mod game;
pub mod renderer; // Event-driven presentation trait
