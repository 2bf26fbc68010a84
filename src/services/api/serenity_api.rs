use super::{ApiError, ChannelKind, ChannelRef, ModerationApi, RoleRef};
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// [`ModerationApi`] backed by Discord's REST API.
pub struct SerenityApi {
    http: Arc<serenity::Http>,
}

impl SerenityApi {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl ModerationApi for SerenityApi {
    async fn ban(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        match reason {
            Some(reason) => {
                guild_id
                    .ban_with_reason(&*self.http, user_id, 0, reason)
                    .await?
            }
            None => guild_id.ban(&*self.http, user_id, 0).await?,
        }
        Ok(())
    }

    async fn kick(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        match reason {
            Some(reason) => {
                guild_id
                    .kick_with_reason(&*self.http, user_id, reason)
                    .await?
            }
            None => guild_id.kick(&*self.http, user_id).await?,
        }
        Ok(())
    }

    async fn find_role(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<RoleRef>, ApiError> {
        let roles = guild_id.roles(&*self.http).await?;
        Ok(roles
            .values()
            .find(|role| role.name == name)
            .map(RoleRef::from))
    }

    async fn create_role(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
        permissions: serenity::Permissions,
        reason: &str,
    ) -> Result<RoleRef, ApiError> {
        let role = guild_id
            .create_role(
                &*self.http,
                serenity::EditRole::new()
                    .name(name)
                    .permissions(permissions)
                    .audit_log_reason(reason),
            )
            .await?;
        Ok(RoleRef::from(&role))
    }

    async fn channels(&self, guild_id: serenity::GuildId) -> Result<Vec<ChannelRef>, ApiError> {
        let mut channels: Vec<_> = guild_id
            .channels(&*self.http)
            .await?
            .into_values()
            .collect();
        channels.sort_by_key(|channel| (channel.position, channel.id));

        Ok(channels
            .into_iter()
            .map(|channel| ChannelRef {
                id: channel.id,
                name: channel.name,
                kind: ChannelKind::from(channel.kind),
            })
            .collect())
    }

    async fn set_channel_override(
        &self,
        channel_id: serenity::ChannelId,
        role_id: serenity::RoleId,
        deny: serenity::Permissions,
    ) -> Result<(), ApiError> {
        channel_id
            .create_permission(
                &*self.http,
                serenity::PermissionOverwrite {
                    allow: serenity::Permissions::empty(),
                    deny,
                    kind: serenity::PermissionOverwriteType::Role(role_id),
                },
            )
            .await?;
        Ok(())
    }

    async fn add_role(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        self.http
            .add_member_role(guild_id, user_id, role_id, reason)
            .await?;
        Ok(())
    }

    async fn remove_role(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
    ) -> Result<(), ApiError> {
        self.http
            .remove_member_role(guild_id, user_id, role_id, None)
            .await?;
        Ok(())
    }

    async fn find_channel(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<ChannelRef>, ApiError> {
        Ok(self
            .channels(guild_id)
            .await?
            .into_iter()
            .find(|channel| channel.kind == ChannelKind::Text && channel.name == name))
    }

    async fn send_message(
        &self,
        channel_id: serenity::ChannelId,
        content: &str,
    ) -> Result<(), ApiError> {
        channel_id.say(&*self.http, content).await?;
        Ok(())
    }
}
