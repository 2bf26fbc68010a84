use super::invocation;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Desmuta um membro.
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_ROLES")]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "Membro a ser desmutado"] member: serenity::Member,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .unmute(&invocation, &Target::from(&member))
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
