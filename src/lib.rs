pub mod bot_command_handlers;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod message_format;
pub mod request_classifier;
pub mod shared_main;
