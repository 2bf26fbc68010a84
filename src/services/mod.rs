pub mod api;
pub mod event_manager;
pub mod localization;
pub mod moderation;
pub mod muted_role;
pub mod welcome;
