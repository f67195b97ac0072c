pub mod agent;
pub mod observation;
pub mod space;
pub mod state;
