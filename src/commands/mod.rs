//! Command implementations for graphwalk

pub mod context;
pub mod convert;
pub mod dispatch;
pub mod path;
pub mod show;
pub mod traverse;
