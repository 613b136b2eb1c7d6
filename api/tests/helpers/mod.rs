pub mod app;
pub mod ws;

pub use app::{admin_token, body_json, make_test_app};
pub use ws::{connect_ws, next_text, spawn_server, wait_for_len, wait_for_open};
