use std::{sync::Arc, time::Instant};

use teloxide::prelude::*;

use crate::data_backend::loader::MenuLoader;
use crate::data_types::{HandlerResult, Menu, MenuRequest, RestaurantType};
use crate::message_format::{build_menu_msg, help_msg, unknown_restaurant_msg};
use crate::request_classifier::classify_message;

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, help_msg()).await?;
    Ok(())
}

/// `/heute [restaurant]`, without an argument the unimensa is meant.
pub async fn heute_cmd(
    bot: Bot,
    msg: Message,
    arg: String,
    loader: Arc<MenuLoader>,
) -> HandlerResult {
    let id = match arg.trim() {
        "" => RestaurantType::UniMensa.id(),
        id => id,
    };

    match loader.load_by_id(id) {
        Some(menu_future) => send_menu(&bot, msg.chat.id, menu_future.await).await,
        None => {
            bot.send_message(msg.chat.id, unknown_restaurant_msg())
                .await?;
            Ok(())
        }
    }
}

/// Free-text endpoint: anything that isn't a menu request is ignored.
pub async fn handle_message(bot: Bot, msg: Message, loader: Arc<MenuLoader>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match classify_message(text) {
        None => Ok(()),
        Some(MenuRequest::UnknownRestaurant) => {
            bot.send_message(msg.chat.id, unknown_restaurant_msg())
                .await?;
            Ok(())
        }
        Some(MenuRequest::Restaurant(restaurant)) => {
            log::info!("Menu request for {} in chat {}", restaurant, msg.chat.id.0);
            let menu = loader.load(restaurant).await;
            send_menu(&bot, msg.chat.id, menu).await
        }
    }
}

async fn send_menu(bot: &Bot, chat_id: ChatId, menu: Option<Menu>) -> HandlerResult {
    let Some(menu) = menu else {
        log::warn!("No menu available, nothing sent to chat {}", chat_id.0);
        return Ok(());
    };

    let now = Instant::now();
    bot.send_message(chat_id, build_menu_msg(&menu)).await?;
    log::debug!("Send {} msg: {:.2?}", menu.restaurant(), now.elapsed());

    Ok(())
}

pub fn is_general_chat(chat_id: ChatId, general_chat: Option<ChatId>) -> bool {
    general_chat == Some(chat_id)
}
