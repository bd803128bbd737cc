//! Terminal login screen

pub mod screen;
pub mod view;
