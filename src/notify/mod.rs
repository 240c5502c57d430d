mod notification;
mod route;
mod surface;
mod tables;
mod toast;
mod tooltip;

#[cfg(test)]
pub(crate) mod testing;

pub use notification::{ColorToken, Icon, Notification, StyleSpec, Variant};
pub use route::{
    DEFAULT_ENTER_DELAY, FeatureAction, MessageTable, RouteKey, RouteMessages, RouteNotifier,
    StaleEnterPolicy,
};
pub use surface::{ChannelSurface, NotificationSurface};
pub use tables::{default_route_messages, default_tooltip_table};
pub use toast::{Toast, ToastId, ToastQueue};
pub use tooltip::{TooltipEntry, TooltipResolver, TooltipTable, normalize_action};
