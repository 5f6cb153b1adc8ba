//! Interactive console over a [`BookProxy`](crate::proxy::BookProxy).

pub mod menu;

pub use menu::{MenuOption, Shell};
