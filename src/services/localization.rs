use fluent::{FluentArgs, FluentResource};
use fluent_bundle::bundle::FluentBundle;
use tracing::{error, info};
use unic_langid::LanguageIdentifier;

// We use the concurrent memoizer to ensure thread safety (Sync + Send)
type ConcurrentBundle = FluentBundle<FluentResource, intl_memoizer::concurrent::IntlLangMemoizer>;

pub const LOCALE: &str = "pt-BR";

// Embed the message catalog at compile time
static MODERATION_FTL: &str = include_str!("../../locales/pt-BR/moderation.ftl");

/// Serves every user-facing string of the bot from the embedded Fluent catalog.
pub struct LocalizationManager {
    bundle: ConcurrentBundle,
}

impl LocalizationManager {
    pub fn new() -> Self {
        let lang_id: LanguageIdentifier = LOCALE.parse().unwrap_or_default();
        let mut bundle = ConcurrentBundle::new_concurrent(vec![lang_id]);

        // Mentions like <@123> must reach Discord untouched, without FSI/PDI marks
        bundle.set_use_isolating(false);

        match FluentResource::try_new(MODERATION_FTL.to_string()) {
            Ok(resource) => {
                if let Err(errors) = bundle.add_resource(resource) {
                    for err in errors {
                        error!("Error adding resource for {}: {:?}", LOCALE, err);
                    }
                }
            }
            Err((_, errors)) => {
                for err in errors {
                    error!("Error parsing resource for {}: {:?}", LOCALE, err);
                }
            }
        }

        info!("Loaded embedded locale: {}", LOCALE);
        Self { bundle }
    }

    /// Formats `key` with `args`, falling back to the key itself when the
    /// message is unknown.
    pub fn t(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let text = self
                    .bundle
                    .format_pattern(pattern, args, &mut errors)
                    .into_owned();
                for err in errors {
                    error!("Error formatting message {}: {:?}", key, err);
                }
                return text;
            }
        }

        key.to_string()
    }
}

impl Default for LocalizationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_isolation_marks() {
        let l10n = LocalizationManager::new();
        let mut args = FluentArgs::new();
        args.set("member", "<@42>");
        args.set("reason", "spam");

        assert_eq!(
            l10n.t("ban-success", Some(&args)),
            "<@42> foi banido(a). Motivo: spam"
        );
    }

    #[test]
    fn plain_messages_need_no_args() {
        let l10n = LocalizationManager::new();
        assert_eq!(l10n.t("reason-unspecified", None), "Não especificado");
        assert_eq!(
            l10n.t("unmute-role-missing", None),
            "O cargo 'Muted' não existe neste servidor."
        );
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let l10n = LocalizationManager::new();
        assert_eq!(l10n.t("no-such-message", None), "no-such-message");
    }
}
