//! UI components for the companion app.

pub mod app;
pub mod chat_page;
pub mod history_page;
pub mod main_page;
pub mod message_input;
