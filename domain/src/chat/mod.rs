//! Chat data shared with the backend API and the embedded chat surface.
//!
//! - [`entities::Message`] — a single chat message from the user or the bot
//! - [`entities::ChatSession`] — a stored conversation
//! - [`documents::ReferenceDocument`] — a policy document the bot cites
//! - [`documents::DocumentSection`] — an extracted section of a document
//! - [`record::ChatRecord`] — any of the above, classified from raw JSON

pub mod documents;
pub mod entities;
pub mod record;
