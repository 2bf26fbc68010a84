use crate::services::api::{ApiError, ChannelKind, ModerationApi, RoleRef};
use poise::serenity_prelude as serenity;
use tracing::{error, info};

pub const MUTED_ROLE_NAME: &str = "Muted";

const CREATE_REASON: &str = "Criando cargo Muted para mutar membros.";

/// Returns the guild's "Muted" role, creating it (and denying it SEND_MESSAGES
/// in every text channel and SPEAK in every voice channel) when absent.
///
/// Failures are logged and reported as `None`. A failure while applying the
/// channel overrides leaves the freshly created role in place.
pub async fn ensure_muted_role(
    api: &dyn ModerationApi,
    guild_id: serenity::GuildId,
) -> Option<RoleRef> {
    match get_or_create(api, guild_id).await {
        Ok(role) => Some(role),
        Err(e) => {
            error!(
                "Failed to set up '{}' role in guild {}: {}",
                MUTED_ROLE_NAME, guild_id, e
            );
            None
        }
    }
}

async fn get_or_create(
    api: &dyn ModerationApi,
    guild_id: serenity::GuildId,
) -> Result<RoleRef, ApiError> {
    if let Some(role) = api.find_role(guild_id, MUTED_ROLE_NAME).await? {
        return Ok(role);
    }

    // Granting nothing: the role carries neither SEND_MESSAGES nor SPEAK
    let role = api
        .create_role(
            guild_id,
            MUTED_ROLE_NAME,
            serenity::Permissions::empty(),
            CREATE_REASON,
        )
        .await?;
    info!(
        "Created role '{}' ({}) in guild {}",
        role.name, role.id, guild_id
    );

    let channels = api.channels(guild_id).await?;
    for channel in channels.iter().filter(|c| c.kind == ChannelKind::Text) {
        api.set_channel_override(channel.id, role.id, serenity::Permissions::SEND_MESSAGES)
            .await?;
    }
    for channel in channels.iter().filter(|c| c.kind == ChannelKind::Voice) {
        api.set_channel_override(channel.id, role.id, serenity::Permissions::SPEAK)
            .await?;
    }

    Ok(role)
}
