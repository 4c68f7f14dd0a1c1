mod args;
mod game_mode;
mod request;
mod server_state;
mod world;
