use crate::services::api::{ApiError, ModerationApi, RoleRef};
use crate::services::localization::LocalizationManager;
use crate::services::muted_role::{MUTED_ROLE_NAME, ensure_muted_role};
use fluent::FluentArgs;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{info, warn};

/// Who invoked a command, where, and which account the bot runs as.
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    pub guild_id: serenity::GuildId,
    pub actor: serenity::UserId,
    pub bot: serenity::UserId,
}

/// The member a command acts upon, as seen when the command arrived.
#[derive(Debug, Clone)]
pub struct Target {
    pub id: serenity::UserId,
    pub roles: Vec<serenity::RoleId>,
}

impl Target {
    pub fn new(id: serenity::UserId, roles: Vec<serenity::RoleId>) -> Self {
        Self { id, roles }
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    pub fn has_role(&self, role_id: serenity::RoleId) -> bool {
        self.roles.contains(&role_id)
    }
}

impl From<&serenity::Member> for Target {
    fn from(member: &serenity::Member) -> Self {
        Self::new(member.user.id, member.roles.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Only the invoker sees it.
    Private,
}

/// The single response a command sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub visibility: Visibility,
}

impl Reply {
    pub fn public(content: String) -> Self {
        Self {
            content,
            visibility: Visibility::Public,
        }
    }

    pub fn private(content: String) -> Self {
        Self {
            content,
            visibility: Visibility::Private,
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

impl From<Reply> for poise::CreateReply {
    fn from(reply: Reply) -> Self {
        let ephemeral = reply.is_private();
        poise::CreateReply::default()
            .content(reply.content)
            .ephemeral(ephemeral)
    }
}

/// Ban, kick, mute, unmute and role grants over a [`ModerationApi`].
///
/// Every operation yields exactly one [`Reply`]; remote failures never escape
/// as errors, they become private replies carrying the cause.
pub struct ModerationService {
    api: Arc<dyn ModerationApi>,
    l10n: Arc<LocalizationManager>,
}

impl ModerationService {
    pub fn new(api: Arc<dyn ModerationApi>, l10n: Arc<LocalizationManager>) -> Self {
        Self { api, l10n }
    }

    pub async fn ban(&self, inv: &Invocation, target: &Target, reason: Option<&str>) -> Reply {
        if let Some(reply) = self.refuse_protected_target("ban", inv, target) {
            return reply;
        }
        let reason = normalize(reason);

        match self.api.ban(inv.guild_id, target.id, reason).await {
            Ok(()) => {
                info!(
                    "{} banned {} in guild {} (reason: {:?})",
                    inv.actor, target.id, inv.guild_id, reason
                );
                Reply::public(
                    self.l10n
                        .t("ban-success", Some(&self.outcome_args(target, reason))),
                )
            }
            Err(e) => self.failure("ban-error", "ban", inv, target, &e),
        }
    }

    pub async fn kick(&self, inv: &Invocation, target: &Target, reason: Option<&str>) -> Reply {
        if let Some(reply) = self.refuse_protected_target("kick", inv, target) {
            return reply;
        }
        let reason = normalize(reason);

        match self.api.kick(inv.guild_id, target.id, reason).await {
            Ok(()) => {
                info!(
                    "{} kicked {} from guild {} (reason: {:?})",
                    inv.actor, target.id, inv.guild_id, reason
                );
                Reply::public(
                    self.l10n
                        .t("kick-success", Some(&self.outcome_args(target, reason))),
                )
            }
            Err(e) => self.failure("kick-error", "kick", inv, target, &e),
        }
    }

    pub async fn mute(&self, inv: &Invocation, target: &Target, reason: Option<&str>) -> Reply {
        if let Some(reply) = self.refuse_protected_target("mute", inv, target) {
            return reply;
        }
        let reason = normalize(reason);

        let Some(muted) = ensure_muted_role(self.api.as_ref(), inv.guild_id).await else {
            return Reply::private(self.l10n.t("mute-role-unavailable", None));
        };

        if target.has_role(muted.id) {
            return Reply::private(
                self.l10n
                    .t("mute-already", Some(&self.member_args(target))),
            );
        }

        match self
            .api
            .add_role(inv.guild_id, target.id, muted.id, reason)
            .await
        {
            Ok(()) => {
                info!(
                    "{} muted {} in guild {} (reason: {:?})",
                    inv.actor, target.id, inv.guild_id, reason
                );
                Reply::public(
                    self.l10n
                        .t("mute-success", Some(&self.outcome_args(target, reason))),
                )
            }
            Err(e) => self.failure("mute-error", "mute", inv, target, &e),
        }
    }

    pub async fn unmute(&self, inv: &Invocation, target: &Target) -> Reply {
        let muted = match self.api.find_role(inv.guild_id, MUTED_ROLE_NAME).await {
            Ok(Some(role)) => role,
            Ok(None) => return Reply::private(self.l10n.t("unmute-role-missing", None)),
            Err(e) => return self.failure("unmute-error", "unmute", inv, target, &e),
        };

        if !target.has_role(muted.id) {
            return Reply::private(
                self.l10n
                    .t("unmute-not-muted", Some(&self.member_args(target))),
            );
        }

        match self
            .api
            .remove_role(inv.guild_id, target.id, muted.id)
            .await
        {
            Ok(()) => {
                info!(
                    "{} unmuted {} in guild {}",
                    inv.actor, target.id, inv.guild_id
                );
                Reply::public(
                    self.l10n
                        .t("unmute-success", Some(&self.member_args(target))),
                )
            }
            Err(e) => self.failure("unmute-error", "unmute", inv, target, &e),
        }
    }

    pub async fn add_role(&self, inv: &Invocation, target: &Target, role: &RoleRef) -> Reply {
        let args = self.role_args(target, role);
        if target.has_role(role.id) {
            return Reply::private(self.l10n.t("addrole-already", Some(&args)));
        }

        match self
            .api
            .add_role(inv.guild_id, target.id, role.id, None)
            .await
        {
            Ok(()) => {
                info!(
                    "{} gave role {} to {} in guild {}",
                    inv.actor, role.id, target.id, inv.guild_id
                );
                Reply::public(self.l10n.t("addrole-success", Some(&args)))
            }
            Err(e) => self.failure("addrole-error", "addrole", inv, target, &e),
        }
    }

    pub async fn remove_role(&self, inv: &Invocation, target: &Target, role: &RoleRef) -> Reply {
        let args = self.role_args(target, role);
        if !target.has_role(role.id) {
            return Reply::private(self.l10n.t("removerole-missing", Some(&args)));
        }

        match self
            .api
            .remove_role(inv.guild_id, target.id, role.id)
            .await
        {
            Ok(()) => {
                info!(
                    "{} took role {} from {} in guild {}",
                    inv.actor, role.id, target.id, inv.guild_id
                );
                Reply::public(self.l10n.t("removerole-success", Some(&args)))
            }
            Err(e) => self.failure("removerole-error", "removerole", inv, target, &e),
        }
    }

    /// Self and bot targets are refused before any remote call.
    fn refuse_protected_target(
        &self,
        command: &str,
        inv: &Invocation,
        target: &Target,
    ) -> Option<Reply> {
        let key = if target.id == inv.actor {
            format!("{}-self", command)
        } else if target.id == inv.bot {
            format!("{}-bot", command)
        } else {
            return None;
        };
        Some(Reply::private(self.l10n.t(&key, None)))
    }

    fn failure(
        &self,
        key: &str,
        command: &str,
        inv: &Invocation,
        target: &Target,
        error: &ApiError,
    ) -> Reply {
        warn!(
            "/{} by {} on {} in guild {} failed: {}",
            command, inv.actor, target.id, inv.guild_id, error
        );
        let mut args = FluentArgs::new();
        args.set("error", error.to_string());
        Reply::private(self.l10n.t(key, Some(&args)))
    }

    fn member_args(&self, target: &Target) -> FluentArgs<'static> {
        let mut args = FluentArgs::new();
        args.set("member", target.mention());
        args
    }

    fn outcome_args(&self, target: &Target, reason: Option<&str>) -> FluentArgs<'static> {
        let mut args = self.member_args(target);
        args.set(
            "reason",
            reason
                .map(str::to_string)
                .unwrap_or_else(|| self.l10n.t("reason-unspecified", None)),
        );
        args
    }

    fn role_args(&self, target: &Target, role: &RoleRef) -> FluentArgs<'static> {
        let mut args = self.member_args(target);
        args.set("role", role.name.clone());
        args
    }
}

/// An empty reason counts as no reason at all.
fn normalize(reason: Option<&str>) -> Option<&str> {
    reason.filter(|r| !r.is_empty())
}
