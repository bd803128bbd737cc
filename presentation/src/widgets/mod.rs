//! Home screen widgets

pub mod chat;
pub mod search_bar;
