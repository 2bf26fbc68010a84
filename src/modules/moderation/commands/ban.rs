use super::invocation;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Bane um membro do servidor.
#[poise::command(slash_command, guild_only, required_permissions = "BAN_MEMBERS")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Membro a ser banido"] member: serenity::Member,
    #[description = "Motivo do banimento"] reason: Option<String>,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .ban(&invocation, &Target::from(&member), reason.as_deref())
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
