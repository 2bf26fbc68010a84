use anyhow::Context as _;
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

mod modules;
mod services;

use services::api::{ModerationApi, SerenityApi};
use services::localization::LocalizationManager;
use services::moderation::ModerationService;

// Custom user data passed to all command functions
pub struct Data {
    pub api: Arc<dyn ModerationApi>,
    pub l10n: Arc<LocalizationManager>,
    pub moderation: Arc<ModerationService>,
    pub bot_id: serenity::UserId,
}

impl Data {
    pub fn new(
        http: Arc<serenity::Http>,
        bot_id: serenity::UserId,
        l10n: Arc<LocalizationManager>,
    ) -> Self {
        let api: Arc<dyn ModerationApi> = Arc::new(SerenityApi::new(http));
        let moderation = Arc::new(ModerationService::new(api.clone(), l10n.clone()));

        Self {
            api,
            l10n,
            moderation,
            bot_id,
        }
    }
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up the framework: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command /{}: {:?}", ctx.command().name, error);
        }
        error => {
            // Covers the permission gate, which answers the invoker itself
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting moderation bot...");

    let token = std::env::var("DISCORD_TOKEN").context("missing DISCORD_TOKEN")?;
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    // Initialize localization manager
    let l10n = Arc::new(LocalizationManager::new());

    let framework_options = poise::FrameworkOptions {
        commands: modules::commands(),
        event_handler: |ctx, event, framework, data| {
            Box::pin(services::event_manager::dispatch(ctx, event, framework, data))
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(framework_options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands)
                    .await
                    .context("Failed to register commands globally")?;
                info!(
                    "Registered {} commands globally",
                    framework.options().commands.len()
                );

                Ok(Data::new(ctx.http.clone(), ready.user.id, l10n))
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Failed to create client")?;

    client.start().await.context("Client error")?;

    Ok(())
}
