use crate::notify::{FeatureAction, RouteKey};
use crate::palette::PaletteKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GotoRoute {
        route: RouteKey,
    },
    NextRoute,
    PrevRoute,
    ShowTooltip {
        action: String,
        custom: Option<String>,
    },
    FeatureToast {
        feature: String,
        action: FeatureAction,
    },
    ActivityToast {
        activity: String,
        action: FeatureAction,
    },
    DismissToasts,
    EditProfile,
    CancelEdit,
    ToggleEdit,
    SetDisplayName {
        value: String,
    },
    SetBio {
        value: String,
    },
    SaveProfile,
    ReloadProfile,
    ChangeAvatar,
    OpenPalette {
        kind: PaletteKind,
        seed: Option<String>,
    },
    ClosePalette,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    GotoRoute,
    NextRoute,
    PrevRoute,
    ShowTooltip,
    FeatureToast,
    ActivityToast,
    DismissToasts,
    EditProfile,
    CancelEdit,
    ToggleEdit,
    SetDisplayName,
    SetBio,
    SaveProfile,
    ReloadProfile,
    ChangeAvatar,
    OpenPalette,
    ClosePalette,
    Cancel,
    Quit,
    Input,
    ProfileLoad,
    ProfileSave,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GotoRoute => "goto-route",
            Self::NextRoute => "next-route",
            Self::PrevRoute => "prev-route",
            Self::ShowTooltip => "tooltip",
            Self::FeatureToast => "feature",
            Self::ActivityToast => "activity",
            Self::DismissToasts => "dismiss-toasts",
            Self::EditProfile => "edit-profile",
            Self::CancelEdit => "cancel-edit",
            Self::ToggleEdit => "toggle-edit",
            Self::SetDisplayName => "set-name",
            Self::SetBio => "set-bio",
            Self::SaveProfile => "save-profile",
            Self::ReloadProfile => "reload-profile",
            Self::ChangeAvatar => "change-avatar",
            Self::OpenPalette => "open-palette",
            Self::ClosePalette => "close-palette",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::ProfileLoad => "profile-load",
            Self::ProfileSave => "profile-save",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::GotoRoute { .. } => ActionId::GotoRoute,
            Self::NextRoute => ActionId::NextRoute,
            Self::PrevRoute => ActionId::PrevRoute,
            Self::ShowTooltip { .. } => ActionId::ShowTooltip,
            Self::FeatureToast { .. } => ActionId::FeatureToast,
            Self::ActivityToast { .. } => ActionId::ActivityToast,
            Self::DismissToasts => ActionId::DismissToasts,
            Self::EditProfile => ActionId::EditProfile,
            Self::CancelEdit => ActionId::CancelEdit,
            Self::ToggleEdit => ActionId::ToggleEdit,
            Self::SetDisplayName { .. } => ActionId::SetDisplayName,
            Self::SetBio { .. } => ActionId::SetBio,
            Self::SaveProfile => ActionId::SaveProfile,
            Self::ReloadProfile => ActionId::ReloadProfile,
            Self::ChangeAvatar => ActionId::ChangeAvatar,
            Self::OpenPalette { .. } => ActionId::OpenPalette,
            Self::ClosePalette => ActionId::ClosePalette,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Single whitespace-free token.
    Word,
    /// Rest of the line, spaces included.
    Text,
    Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub args: &'static [ArgSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
