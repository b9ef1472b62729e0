pub mod cooldowns;
pub mod infractions;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod reminder;
pub mod stats;
