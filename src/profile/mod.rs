mod flow;
mod model;

pub use flow::{
    EditForm, FetchFailure, LOAD_FAILED_MESSAGE, ProfileFetch, ProfileLoad, ProfileState,
    ProfileView, SAVE_FAILED_MESSAGE, SAVED_MESSAGE, SAVED_TITLE, SaveFailure, SaveOutcome,
    SaveRequest, StatsReport, announce_avatar_soon, load_profile, save_profile,
};
pub use model::{
    POINTS_PER_LEVEL, StatKind, UserProfile, UserStats, level_progress, month_year_pt,
    next_level_points,
};
