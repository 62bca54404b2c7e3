/// Lendboard Console - operator CLI over the user-list pipeline
pub mod config;
pub mod error;
pub mod render;
pub mod wiring;
