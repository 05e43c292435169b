//! HTTP request handlers.

pub mod hello;

pub use hello::{HELLO_MESSAGE, hello_handler};
