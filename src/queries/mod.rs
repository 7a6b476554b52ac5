//! Query modules for the Scryfall SDK.
//!
//! Each module provides a query struct that borrows the client's
//! [`Transport`](crate::transport::Transport) and exposes methods returning
//! `Result<T>` with typed models.

pub mod cards;

pub use cards::CardQuery;
