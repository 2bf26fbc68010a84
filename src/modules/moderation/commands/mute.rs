use super::invocation;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Muta um membro (impede de falar/teclar).
///
/// Atribui o cargo "Muted", criando-o na primeira vez.
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_ROLES")]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "Membro a ser mutado"] member: serenity::Member,
    #[description = "Motivo do mute"] reason: Option<String>,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .mute(&invocation, &Target::from(&member), reason.as_deref())
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
