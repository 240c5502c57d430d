use std::sync::Arc;

use crate::app::App;
use crate::backend::{CommunityBackend, Dataset, LocalStore};
use crate::config::Config;
use crate::notify::RouteKey;

fn demo_backend() -> Arc<dyn CommunityBackend> {
    Arc::new(LocalStore::in_memory(Dataset::demo()))
}

#[test]
fn new_with_config_applies_initial_route_and_toast_limit() {
    let mut config = Config::default();
    config.navigation.initial_route = "/ranking".to_string();
    config.toast.max_visible = 5;

    let app = App::new_with_config(config, demo_backend()).expect("app init");

    assert_eq!(app.state.route, RouteKey::new("/ranking"));
    assert!(app.notifications.toasts.is_empty());
    assert_eq!(app.config.toast.max_visible, 5);
}

#[test]
fn new_with_config_rejects_relative_initial_route() {
    let mut config = Config::default();
    config.navigation.initial_route = "forum".to_string();

    assert!(App::new_with_config(config, demo_backend()).is_err());
}
