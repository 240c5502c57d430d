mod chrome;
mod layout;
mod overlay;
mod page;
mod theme;

pub use chrome::draw_chrome;
pub use layout::{UiLayout, split_layout};
pub use overlay::{draw_palette_overlay, draw_toast_stack};
pub use page::draw_page;
pub use theme::token_color;
