pub mod launcher;
pub mod process_supervisor;
pub mod readiness;
pub mod server_process;
pub mod session_log;
