use crate::services::api::{ApiError, ModerationApi};
use crate::services::localization::LocalizationManager;
use fluent::FluentArgs;
use poise::serenity_prelude as serenity;
use tracing::info;

pub const WELCOME_CHANNEL_NAME: &str = "geral";

/// Greets a new member in the guild's welcome channel.
///
/// Returns `Ok(false)` when the guild has no such channel.
pub async fn greet_new_member(
    api: &dyn ModerationApi,
    l10n: &LocalizationManager,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> Result<bool, ApiError> {
    let Some(channel) = api.find_channel(guild_id, WELCOME_CHANNEL_NAME).await? else {
        return Ok(false);
    };

    let mut args = FluentArgs::new();
    args.set("member", format!("<@{}>", user_id));
    api.send_message(channel.id, &l10n.t("welcome-message", Some(&args)))
        .await?;

    info!("Welcomed {} in #{} ({})", user_id, channel.name, guild_id);
    Ok(true)
}
