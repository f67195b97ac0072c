pub mod implementations;
pub mod scenarios;
pub mod traits;
