//! Cart data model and the pure transition rules applied to it.

pub mod action;
pub mod item;
pub mod money;
pub mod state;
pub mod summary;
