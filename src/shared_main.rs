use std::env;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot_command_handlers::{handle_message, heute_cmd, is_general_chat, start};
use crate::data_types::Command;

pub fn logger_init(module_path: &str) {
    let crate_level =
        if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default() == "debug"
        {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(module_path, crate_level)
        .filter_module("mensabot_rs", crate_level)
        .init();
}

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::Help].endpoint(start))
        .branch(case![Command::Heute(arg)].endpoint(heute_cmd));

    // messages from the general chat are never handled
    Update::filter_message()
        .filter(|msg: Message, general_chat: Option<ChatId>| {
            !is_general_chat(msg.chat.id, general_chat)
        })
        .branch(command_handler)
        .branch(dptree::endpoint(handle_message))
}
