#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Command,
    Action,
    ProfileName,
    ProfileBio,
}

impl PaletteKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Action => "action",
            Self::ProfileName => "profile-name",
            Self::ProfileBio => "profile-bio",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "command" => Some(Self::Command),
            "action" => Some(Self::Action),
            "profile-name" => Some(Self::ProfileName),
            "profile-bio" => Some(Self::ProfileBio),
            _ => None,
        }
    }
}
