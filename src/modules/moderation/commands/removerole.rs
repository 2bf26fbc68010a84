use super::invocation;
use crate::services::api::RoleRef;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Remove um cargo de um membro.
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_ROLES")]
pub async fn removerole(
    ctx: Context<'_>,
    #[description = "Membro que perderá o cargo"] member: serenity::Member,
    #[description = "Cargo a ser removido"] role: serenity::Role,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .remove_role(&invocation, &Target::from(&member), &RoleRef::from(&role))
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
