pub mod addrole;
pub mod ban;
pub mod kick;
pub mod mute;
pub mod removerole;
pub mod unmute;

pub use addrole::*;
pub use ban::*;
pub use kick::*;
pub use mute::*;
pub use removerole::*;
pub use unmute::*;

use crate::services::moderation::Invocation;
use crate::{Context, Error};

/// Builds the invocation for a guild-only command.
pub(crate) fn invocation(ctx: Context<'_>) -> Result<Invocation, Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or_else(|| anyhow::anyhow!("Moderation commands require a guild"))?;

    Ok(Invocation {
        guild_id,
        actor: ctx.author().id,
        bot: ctx.data().bot_id,
    })
}
