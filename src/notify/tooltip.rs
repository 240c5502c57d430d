//! Free-text action labels resolved to a tooltip toast.

use std::sync::Arc;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::notification::{Icon, Notification, Variant};
use super::surface::NotificationSurface;

pub const TOOLTIP_DURATION_MS: u64 = 2500;

/// Lower-cases, strips combining accents and trims, so "  Pésquisar " becomes "pesquisar".
pub fn normalize_action(action: &str) -> String {
    action
        .to_lowercase()
        .nfd()
        .filter(|ch| !('\u{0300}'..='\u{036f}').contains(ch))
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipEntry {
    pub key: String,
    pub icon: Icon,
    pub message: String,
    pub variant: Variant,
}

impl TooltipEntry {
    pub fn new(
        key: impl Into<String>,
        icon: Icon,
        message: impl Into<String>,
        variant: Variant,
    ) -> Self {
        Self {
            key: key.into(),
            icon,
            message: message.into(),
            variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipTable {
    entries: Vec<TooltipEntry>,
    default: TooltipEntry,
}

impl TooltipTable {
    pub fn new(entries: Vec<TooltipEntry>, default: TooltipEntry) -> Self {
        Self { entries, default }
    }

    pub fn entries(&self) -> &[TooltipEntry] {
        &self.entries
    }

    pub fn default_entry(&self) -> &TooltipEntry {
        &self.default
    }

    /// First entry, in declaration order, whose key and the normalized label contain
    /// one another. A blank label normalizes to "" and so matches the first entry.
    pub fn resolve(&self, action: &str) -> &TooltipEntry {
        self.matches(action).next().unwrap_or(&self.default)
    }

    /// Every entry matching `action`, in declaration order. The first one is what
    /// `resolve` returns.
    pub fn matches(&self, action: &str) -> impl Iterator<Item = &TooltipEntry> {
        let normalized = normalize_action(action);
        self.entries
            .iter()
            .filter(move |entry| normalized.contains(&entry.key) || entry.key.contains(&normalized))
    }
}

pub struct TooltipResolver {
    table: Arc<TooltipTable>,
    surface: Arc<dyn NotificationSurface>,
}

impl TooltipResolver {
    pub fn new(table: Arc<TooltipTable>, surface: Arc<dyn NotificationSurface>) -> Self {
        Self { table, surface }
    }

    pub fn show_tooltip(&self, action: &str, custom_message: Option<&str>) {
        let entry = self.table.resolve(action);
        debug!(action, key = %entry.key, "tooltip resolved");
        let message = custom_message
            .filter(|message| !message.is_empty())
            .unwrap_or(entry.message.as_str());
        self.surface.display(
            Notification::new(message)
                .with_icon(Some(entry.icon))
                .with_style(entry.variant.style())
                .lasting_ms(TOOLTIP_DURATION_MS),
        );
    }

    pub fn show_custom_tooltip(&self, message: &str, icon: Option<Icon>, variant: Option<Variant>) {
        let variant = variant.unwrap_or_default();
        self.surface.display(
            Notification::new(message)
                .with_icon(Some(icon.unwrap_or(Icon::Info)))
                .with_style(variant.style())
                .lasting_ms(TOOLTIP_DURATION_MS),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::{TooltipResolver, normalize_action};
    use crate::notify::testing::RecordingSurface;
    use crate::notify::{Icon, StyleSpec, Variant, default_tooltip_table};

    fn resolver(surface: &Arc<RecordingSurface>) -> TooltipResolver {
        TooltipResolver::new(Arc::new(default_tooltip_table()), surface.clone())
    }

    #[test]
    fn normalize_folds_case_accents_and_whitespace() {
        assert_eq!(normalize_action("  Pésquisar Tópicos "), "pesquisar topicos");
        assert_eq!(normalize_action("EXCLUÍR"), "excluir");
        assert_eq!(normalize_action("   "), "");
    }

    #[test]
    fn resolve_matches_substrings_in_both_directions() {
        let table = default_tooltip_table();
        assert_eq!(table.resolve("Criar Post").key, "criar");
        // "compartilhar" is declared before "comentar".
        assert_eq!(table.resolve("com").key, "compartilhar");
        assert_eq!(table.resolve("Baixar relatório").key, "baixar");
    }

    #[test]
    fn resolve_prefers_declaration_order() {
        let table = default_tooltip_table();
        // Contains both "ver" and "enviar"; "ver" is declared first.
        assert_eq!(table.resolve("ver e enviar").key, "ver");
        assert_eq!(table.resolve("Atualizar Feed").key, "atualizar");
    }

    #[test]
    fn resolve_is_accent_insensitive() {
        let table = default_tooltip_table();
        assert_eq!(table.resolve("Exclúir conta").key, "excluir");
        assert_eq!(table.resolve("COMPARTILHAR").key, "compartilhar");
    }

    #[test]
    fn blank_label_resolves_to_first_entry() {
        let table = default_tooltip_table();
        assert_eq!(table.resolve("").key, "criar");
        assert_eq!(table.resolve("  \t ").key, "criar");
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        let table = default_tooltip_table();
        let entry = table.resolve("Xyzzy");
        assert_eq!(entry, table.default_entry());
        assert_eq!(entry.message, "Ação realizada com sucesso");
        assert_eq!(entry.variant, Variant::Info);
    }

    #[test]
    fn show_tooltip_uses_entry_message_icon_and_variant() {
        let surface = RecordingSurface::shared();
        resolver(&surface).show_tooltip("Curtir", None);

        let shown = surface.notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message, "Você curtiu este conteúdo");
        assert_eq!(shown[0].icon, Some(Icon::Heart));
        assert_eq!(shown[0].style, StyleSpec::SUCCESS);
        assert_eq!(shown[0].duration, Duration::from_millis(2500));
    }

    #[test]
    fn custom_message_overrides_only_when_non_empty() {
        let surface = RecordingSurface::shared();
        let resolver = resolver(&surface);
        resolver.show_tooltip("Deletar", Some("Post apagado"));
        resolver.show_tooltip("Deletar", Some(""));

        let shown = surface.notifications();
        assert_eq!(shown[0].message, "Post apagado");
        assert_eq!(shown[0].icon, Some(Icon::Trash));
        assert_eq!(shown[0].style, StyleSpec::WARNING);
        assert_eq!(shown[1].message, "Item removido");
    }

    #[test]
    fn custom_tooltip_defaults_to_info() {
        let surface = RecordingSurface::shared();
        let resolver = resolver(&surface);
        resolver.show_custom_tooltip("Em breve", None, None);
        resolver.show_custom_tooltip("Pronto", Some(Icon::Zap), Some(Variant::Success));

        let shown = surface.notifications();
        assert_eq!(shown[0].icon, Some(Icon::Info));
        assert_eq!(shown[0].style, StyleSpec::INFO);
        assert_eq!(shown[1].icon, Some(Icon::Zap));
        assert_eq!(shown[1].style, StyleSpec::SUCCESS);
    }
}
