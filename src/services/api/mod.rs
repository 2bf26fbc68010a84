//! The capability boundary between the bot and the Discord REST API.
//!
//! Every state-changing call the bot makes goes through [`ModerationApi`], so
//! the moderation services can be exercised against a recording double in
//! tests and against [`SerenityApi`] in production.

#[cfg(test)]
pub mod mock;
mod serenity_api;

pub use serenity_api::SerenityApi;

use poise::serenity_prelude as serenity;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] serenity::Error),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRef {
    pub id: serenity::RoleId,
    pub name: String,
}

impl From<&serenity::Role> for RoleRef {
    fn from(role: &serenity::Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    Other,
}

impl From<serenity::ChannelType> for ChannelKind {
    fn from(kind: serenity::ChannelType) -> Self {
        match kind {
            // Announcement channels are text channels that members post in
            serenity::ChannelType::Text | serenity::ChannelType::News => ChannelKind::Text,
            serenity::ChannelType::Voice => ChannelKind::Voice,
            _ => ChannelKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: serenity::ChannelId,
    pub name: String,
    pub kind: ChannelKind,
}

#[async_trait::async_trait]
pub trait ModerationApi: Send + Sync {
    async fn ban(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn kick(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError>;

    /// Exact, case-sensitive name match.
    async fn find_role(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<RoleRef>, ApiError>;

    async fn create_role(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
        permissions: serenity::Permissions,
        reason: &str,
    ) -> Result<RoleRef, ApiError>;

    async fn channels(&self, guild_id: serenity::GuildId) -> Result<Vec<ChannelRef>, ApiError>;

    /// Denies `deny` for `role_id` in the channel, allowing nothing extra.
    async fn set_channel_override(
        &self,
        channel_id: serenity::ChannelId,
        role_id: serenity::RoleId,
        deny: serenity::Permissions,
    ) -> Result<(), ApiError>;

    async fn add_role(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
        reason: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn remove_role(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
    ) -> Result<(), ApiError>;

    /// Looks up a text channel by exact name.
    async fn find_channel(
        &self,
        guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<ChannelRef>, ApiError>;

    async fn send_message(
        &self,
        channel_id: serenity::ChannelId,
        content: &str,
    ) -> Result<(), ApiError>;
}
