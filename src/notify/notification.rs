//! Notification values handed to a [`NotificationSurface`](super::NotificationSurface).
//!
//! A notification has no identity and is never persisted: the surface decides how
//! long it stays on screen from `duration`, and how it looks from `style`.

use std::time::Duration;

/// Glyphs a notification can carry next to its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Check,
    Info,
    AlertCircle,
    Plus,
    Search,
    Eye,
    Download,
    Upload,
    Settings,
    Edit,
    Trash,
    Heart,
    Share,
    MessageCircle,
    Filter,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Check => "✓",
            Self::Info => "i",
            Self::AlertCircle => "!",
            Self::Plus => "+",
            Self::Search => "?",
            Self::Eye => "◉",
            Self::Download => "↓",
            Self::Upload => "↑",
            Self::Settings => "⚙",
            Self::Edit => "✎",
            Self::Trash => "✗",
            Self::Heart => "♥",
            Self::Share => "↗",
            Self::MessageCircle => "✉",
            Self::Filter => "≡",
            Self::Zap => "↻",
        }
    }
}

/// Tooltip flavour; picks one of the fixed colour presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Success,
    #[default]
    Info,
    Warning,
}

impl Variant {
    pub fn id(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn style(self) -> StyleSpec {
        match self {
            Self::Success => StyleSpec::SUCCESS,
            Self::Info => StyleSpec::INFO,
            Self::Warning => StyleSpec::WARNING,
        }
    }
}

/// Theme slots; the renderer maps them to concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Background,
    Foreground,
    Border,
    Muted,
    MutedForeground,
    Primary,
    Success,
    Warning,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    pub background: ColorToken,
    pub border: ColorToken,
    pub foreground: ColorToken,
}

impl StyleSpec {
    pub const SUCCESS: Self = Self::new(
        ColorToken::Background,
        ColorToken::Success,
        ColorToken::Success,
    );
    pub const INFO: Self = Self::new(
        ColorToken::Background,
        ColorToken::Primary,
        ColorToken::Primary,
    );
    pub const WARNING: Self = Self::new(
        ColorToken::Background,
        ColorToken::Warning,
        ColorToken::Warning,
    );
    /// Route and feature entry toasts.
    pub const ENTER: Self = Self::new(
        ColorToken::Background,
        ColorToken::Border,
        ColorToken::Foreground,
    );
    /// Route and feature exit toasts.
    pub const MUTED: Self = Self::new(
        ColorToken::Muted,
        ColorToken::Border,
        ColorToken::MutedForeground,
    );
    pub const DESTRUCTIVE: Self = Self::new(
        ColorToken::Background,
        ColorToken::Destructive,
        ColorToken::Destructive,
    );

    pub const fn new(background: ColorToken, border: ColorToken, foreground: ColorToken) -> Self {
        Self {
            background,
            border,
            foreground,
        }
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::ENTER
    }
}

const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub title: Option<String>,
    pub icon: Option<Icon>,
    pub duration: Duration,
    pub style: StyleSpec,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            icon: None,
            duration: DEFAULT_DURATION,
            style: StyleSpec::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn lasting_ms(mut self, millis: u64) -> Self {
        self.duration = Duration::from_millis(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Icon, Notification, StyleSpec, Variant};

    #[test]
    fn variant_styles_are_distinct() {
        assert_ne!(Variant::Success.style(), Variant::Info.style());
        assert_ne!(Variant::Success.style(), Variant::Warning.style());
        assert_ne!(Variant::Info.style(), Variant::Warning.style());
    }

    #[test]
    fn variant_parse_accepts_known_ids_only() {
        for variant in [Variant::Success, Variant::Info, Variant::Warning] {
            assert_eq!(Variant::parse(variant.id()), Some(variant));
        }
        assert_eq!(Variant::parse("danger"), None);
    }

    #[test]
    fn builder_sets_every_field() {
        let notification = Notification::new("Dados salvos com sucesso")
            .with_title("Perfil")
            .with_icon(Some(Icon::Check))
            .with_style(StyleSpec::SUCCESS)
            .lasting_ms(2500);

        assert_eq!(notification.message, "Dados salvos com sucesso");
        assert_eq!(notification.title.as_deref(), Some("Perfil"));
        assert_eq!(notification.icon, Some(Icon::Check));
        assert_eq!(notification.style, StyleSpec::SUCCESS);
        assert_eq!(notification.duration, Duration::from_millis(2500));
    }
}
