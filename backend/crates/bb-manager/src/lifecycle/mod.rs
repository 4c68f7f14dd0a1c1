mod actions;
pub mod context;
mod events;
pub mod manager;
pub mod messages;
pub mod rejection;
