pub mod args;
pub mod game_mode;
pub mod instance_id;
pub mod lifecycle_event;
pub mod request;
pub mod server_state;
pub mod world;
