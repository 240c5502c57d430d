mod kind;
mod manager;
pub mod providers;
mod registry;
mod types;

pub use kind::PaletteKind;
pub use manager::PaletteManager;
pub use registry::PaletteRegistry;
pub use types::{
    PaletteCandidate, PaletteContext, PaletteInputMode, PaletteItemView, PaletteKeyResult,
    PaletteProvider, PaletteSubmitAction, PaletteSubmitEffect, PaletteTabEffect, PaletteView,
};
