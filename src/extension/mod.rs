mod header;
mod host;
mod navigation;
mod traits;

pub use header::{HeaderExtension, MESSAGES_FEATURE, NOTIFICATIONS_FEATURE};
pub use host::ExtensionHost;
pub use navigation::NavigationExtension;
pub use traits::{Extension, ExtensionEnv};
