use super::invocation;
use crate::services::api::RoleRef;
use crate::services::moderation::Target;
use crate::{Context, Error};
use poise::serenity_prelude as serenity;

/// Adiciona um cargo a um membro.
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_ROLES")]
pub async fn addrole(
    ctx: Context<'_>,
    #[description = "Membro que receberá o cargo"] member: serenity::Member,
    #[description = "Cargo a ser adicionado"] role: serenity::Role,
) -> Result<(), Error> {
    let invocation = invocation(ctx)?;
    let reply = ctx
        .data()
        .moderation
        .add_role(&invocation, &Target::from(&member), &RoleRef::from(&role))
        .await;

    ctx.send(reply.into()).await?;
    Ok(())
}
