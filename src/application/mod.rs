//! Application layer owning the session's cart.
//!
//! `CartEngine` holds the current `CartState`, applies dispatched actions and
//! publishes snapshots through a `tokio::sync::watch` channel so several
//! readers can observe the same consistent cart.

pub mod engine;
