use crate::notify::RouteKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Short label for the navigation bar.
    pub tab: &'static str,
    pub title: &'static str,
}

pub const ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: "/",
        tab: "Início",
        title: "Painel Principal",
    },
    RouteEntry {
        path: "/forum",
        tab: "Fóruns",
        title: "Fóruns de Discussão",
    },
    RouteEntry {
        path: "/study-groups",
        tab: "Grupos",
        title: "Grupos de Estudo",
    },
    RouteEntry {
        path: "/ranking",
        tab: "Ranking",
        title: "Ranking da Comunidade",
    },
    RouteEntry {
        path: "/profile",
        tab: "Perfil",
        title: "Meu Perfil",
    },
];

pub const PROFILE_PATH: &str = "/profile";
pub const NOT_FOUND_TITLE: &str = "Página não encontrada";

pub fn route_index(route: &RouteKey) -> Option<usize> {
    ROUTES.iter().position(|entry| entry.path == route.as_str())
}

pub fn route_title(route: &RouteKey) -> &'static str {
    route_index(route)
        .map(|index| ROUTES[index].title)
        .unwrap_or(NOT_FOUND_TITLE)
}

pub fn route_at(index: usize) -> Option<RouteKey> {
    ROUTES.get(index).map(|entry| RouteKey::new(entry.path))
}

/// Neighbouring known route, wrapping at both ends. Unknown routes step back to the first one.
pub fn step_route(current: &RouteKey, forward: bool) -> RouteKey {
    let len = ROUTES.len();
    let next = match route_index(current) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None => 0,
    };
    RouteKey::new(ROUTES[next].path)
}
