pub mod attendance;
pub mod calculator;
pub mod correct;
pub mod log;
pub mod ongoing;
pub mod policy;
pub mod reminder;
pub mod remove;
pub mod warn;
pub mod worked;
