use crate::services::api::ModerationApi;
use crate::services::localization::LocalizationManager;
use crate::services::welcome;
use crate::{Data, Error};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Handles non-command Discord events
pub async fn dispatch(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            info!(
                "Logged in as {} ({})",
                data_about_bot.user.name, data_about_bot.user.id
            );
        }
        serenity::FullEvent::GuildMemberAddition { new_member, .. } => {
            handle_member_join(
                data.api.as_ref(),
                &data.l10n,
                new_member.guild_id,
                new_member.user.id,
            )
            .await;
        }
        _ => {}
    }

    Ok(())
}

/// Greets the member; failures are logged and go no further.
async fn handle_member_join(
    api: &dyn ModerationApi,
    l10n: &LocalizationManager,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) {
    if let Err(e) = welcome::greet_new_member(api, l10n, guild_id, user_id).await {
        error!(
            "Error welcoming {} to guild {}: {:?}",
            user_id, guild_id, e
        );
    }
}
