use super::invocation;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Expulsa um membro do servidor.
#[poise::command(slash_command, guild_only, required_permissions = "KICK_MEMBERS")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Membro a ser expulso"] member: serenity::Member,
    #[description = "Motivo da expulsão"] reason: Option<String>,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .kick(&invocation, &Target::from(&member), reason.as_deref())
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
