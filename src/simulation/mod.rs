pub mod config;
pub mod engine;
pub mod guard;
pub mod propagation;
pub mod reward;
pub mod runner;
pub mod scheduler;
