use mensabot_rs::constants::{DEFAULT_SOURCE_LANG, DEFAULT_TRANSLATE_ENGINE, DEFAULT_TRANSLATE_URL};
use mensabot_rs::data_backend::loader::MenuLoader;
use mensabot_rs::data_backend::translation::{HttpTranslator, Translator, TranslatorConfig};
use mensabot_rs::shared_main::{logger_init, schema};

use clap::Parser;
use log::log_enabled;
use std::sync::Arc;
use teloxide::prelude::*;

/// Telegram bot answering "what's for lunch" with today's menu of the
/// unimensa and a few restaurants around it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The telegram bot token to be used
    #[arg(short, long, env = "TELOXIDE_TOKEN", default_value = "", hide_env_values = true)]
    token: String,
    /// API key for dish name translation{n}Translation is disabled if empty
    #[arg(long, env = "TRANSLATE_API_KEY", default_value = "", hide_env_values = true)]
    translate_key: String,
    /// Translation engine / model selector
    #[arg(long, env = "TRANSLATE_ENGINE", default_value = DEFAULT_TRANSLATE_ENGINE)]
    translate_engine: String,
    /// Translation API endpoint
    #[arg(long, env = "TRANSLATE_URL", default_value = DEFAULT_TRANSLATE_URL)]
    translate_url: String,
    /// Language of the dish names
    #[arg(long, env = "TRANSLATE_SOURCE_LANG", default_value = DEFAULT_SOURCE_LANG)]
    source_lang: String,
    /// Chat-ID whose messages are ignored entirely
    #[arg(long, env = "GENERAL_CHAT_ID", allow_negative_numbers = true)]
    general_chat: Option<i64>,
    /// Enable verbose logging (mostly performance metrics){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    //// Args setup
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());
    log::info!("Starting bot...");

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for performance metrics");
    }

    let client = reqwest::Client::new();

    let translator: Option<Arc<dyn Translator>> = if args.translate_key.is_empty() {
        log::warn!("No translation API key set, dish names stay untranslated");
        None
    } else {
        Some(Arc::new(HttpTranslator::new(
            client.clone(),
            TranslatorConfig {
                url: args.translate_url,
                api_key: args.translate_key,
                engine: args.translate_engine,
                source_lang: args.source_lang,
            },
        )))
    };

    let loader = Arc::new(MenuLoader::new(client, translator));
    let general_chat = args.general_chat.map(ChatId);

    let bot = Bot::new(args.token);

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![loader, general_chat])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
