//! Command implementations for waypath

pub mod dispatch;
pub mod locations;
pub mod nearest;
pub mod path;
