pub mod time;
pub mod schedule;
pub mod rng;
