//! Command implementations for campusnav

pub mod dispatch;
pub mod route;
pub mod stats;
