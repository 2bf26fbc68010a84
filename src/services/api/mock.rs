//! Recording [`ModerationApi`] double for unit tests.

use super::{ApiError, ChannelKind, ChannelRef, ModerationApi, RoleRef};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ban {
        user: serenity::UserId,
        reason: Option<String>,
    },
    Kick {
        user: serenity::UserId,
        reason: Option<String>,
    },
    FindRole(String),
    CreateRole {
        name: String,
        permissions: serenity::Permissions,
    },
    Channels,
    SetChannelOverride {
        channel: serenity::ChannelId,
        role: serenity::RoleId,
        deny: serenity::Permissions,
    },
    AddRole {
        user: serenity::UserId,
        role: serenity::RoleId,
        reason: Option<String>,
    },
    RemoveRole {
        user: serenity::UserId,
        role: serenity::RoleId,
    },
    FindChannel(String),
    SendMessage {
        channel: serenity::ChannelId,
        content: String,
    },
}

impl Call {
    /// Whether the call changes remote state.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::FindRole(_) | Call::Channels | Call::FindChannel(_)
        )
    }
}

#[derive(Default)]
struct MockState {
    next_id: u64,
    roles: Vec<RoleRef>,
    channels: Vec<ChannelRef>,
    member_roles: HashMap<serenity::UserId, Vec<serenity::RoleId>>,
    failures: HashMap<&'static str, String>,
    calls: Vec<Call>,
}

impl MockState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        1_000 + self.next_id
    }
}

/// In-memory guild that records every call made against it.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(&self, name: &str) -> RoleRef {
        let mut state = self.state.lock().unwrap();
        let role = RoleRef {
            id: serenity::RoleId::new(state.next_id()),
            name: name.to_string(),
        };
        state.roles.push(role.clone());
        role
    }

    pub fn with_channel(&self, name: &str, kind: ChannelKind) -> ChannelRef {
        let mut state = self.state.lock().unwrap();
        let channel = ChannelRef {
            id: serenity::ChannelId::new(state.next_id()),
            name: name.to_string(),
            kind,
        };
        state.channels.push(channel.clone());
        channel
    }

    pub fn give_role(&self, user: serenity::UserId, role: serenity::RoleId) {
        let mut state = self.state.lock().unwrap();
        state.member_roles.entry(user).or_default().push(role);
    }

    /// Roles the mock believes `user` holds, as a fresh member fetch would.
    pub fn roles_of(&self, user: serenity::UserId) -> Vec<serenity::RoleId> {
        let state = self.state.lock().unwrap();
        state.member_roles.get(&user).cloned().unwrap_or_default()
    }

    /// Makes every later call to `operation` fail with `message`.
    pub fn fail(&self, operation: &'static str, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.failures.insert(operation, message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_mutation)
            .collect()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.get(operation) {
            Some(message) => Err(ApiError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ModerationApi for MockApi {
    async fn ban(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        self.record(
            "ban",
            Call::Ban {
                user: user_id,
                reason: reason.map(str::to_string),
            },
        )
    }

    async fn kick(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        self.record(
            "kick",
            Call::Kick {
                user: user_id,
                reason: reason.map(str::to_string),
            },
        )
    }

    async fn find_role(
        &self,
        _guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<RoleRef>, ApiError> {
        self.record("find_role", Call::FindRole(name.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state.roles.iter().find(|role| role.name == name).cloned())
    }

    async fn create_role(
        &self,
        _guild_id: serenity::GuildId,
        name: &str,
        permissions: serenity::Permissions,
        _reason: &str,
    ) -> Result<RoleRef, ApiError> {
        self.record(
            "create_role",
            Call::CreateRole {
                name: name.to_string(),
                permissions,
            },
        )?;
        Ok(self.with_role(name))
    }

    async fn channels(&self, _guild_id: serenity::GuildId) -> Result<Vec<ChannelRef>, ApiError> {
        self.record("channels", Call::Channels)?;
        Ok(self.state.lock().unwrap().channels.clone())
    }

    async fn set_channel_override(
        &self,
        channel_id: serenity::ChannelId,
        role_id: serenity::RoleId,
        deny: serenity::Permissions,
    ) -> Result<(), ApiError> {
        self.record(
            "set_channel_override",
            Call::SetChannelOverride {
                channel: channel_id,
                role: role_id,
                deny,
            },
        )
    }

    async fn add_role(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
        reason: Option<&str>,
    ) -> Result<(), ApiError> {
        self.record(
            "add_role",
            Call::AddRole {
                user: user_id,
                role: role_id,
                reason: reason.map(str::to_string),
            },
        )?;
        self.give_role(user_id, role_id);
        Ok(())
    }

    async fn remove_role(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        role_id: serenity::RoleId,
    ) -> Result<(), ApiError> {
        self.record(
            "remove_role",
            Call::RemoveRole {
                user: user_id,
                role: role_id,
            },
        )?;
        let mut state = self.state.lock().unwrap();
        if let Some(roles) = state.member_roles.get_mut(&user_id) {
            roles.retain(|role| *role != role_id);
        }
        Ok(())
    }

    async fn find_channel(
        &self,
        _guild_id: serenity::GuildId,
        name: &str,
    ) -> Result<Option<ChannelRef>, ApiError> {
        self.record("find_channel", Call::FindChannel(name.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .channels
            .iter()
            .find(|channel| channel.kind == ChannelKind::Text && channel.name == name)
            .cloned())
    }

    async fn send_message(
        &self,
        channel_id: serenity::ChannelId,
        content: &str,
    ) -> Result<(), ApiError> {
        self.record(
            "send_message",
            Call::SendMessage {
                channel: channel_id,
                content: content.to_string(),
            },
        )
    }
}
