use tracing::debug;

use crate::error::{Error, Result};

/// Top-level views.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Game,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Home",
        page: Page::Home,
    },
    Route {
        path: "/game",
        name: "Game",
        page: Page::Game,
    },
];

impl Page {
    pub fn route(self) -> &'static Route {
        // Every variant has exactly one entry in ROUTES.
        match self {
            Page::Home => &ROUTES[0],
            Page::Game => &ROUTES[1],
        }
    }

    pub fn path(self) -> &'static str {
        self.route().path
    }

    pub fn name(self) -> &'static str {
        self.route().name
    }
}

/// Strip query and fragment, and a single trailing slash on non-root paths.
fn normalize(location: &str) -> &str {
    let path = location
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Resolve a location to its page. Unknown paths have no page.
pub fn resolve(location: &str) -> Option<Page> {
    let path = normalize(location);
    ROUTES
        .iter()
        .find(|r| r.path.eq_ignore_ascii_case(path))
        .map(|r| r.page)
}

/// Client-side navigator: the current page plus a back stack.
#[derive(Debug, Clone)]
pub struct Router {
    current: Page,
    history: Vec<Page>,
}

impl Router {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Navigate to `location`. On an unknown path the current page is kept.
    pub fn push(&mut self, location: &str) -> Result<Page> {
        let page = resolve(location).ok_or_else(|| Error::UnknownRoute(location.to_string()))?;
        if page != self.current {
            debug!(from = self.current.path(), to = page.path(), "navigate");
            self.history.push(self.current);
            self.current = page;
        }
        Ok(page)
    }

    /// Return to the previous page, if any.
    pub fn back(&mut self) -> Option<Page> {
        let prev = self.history.pop()?;
        self.current = prev;
        Some(prev)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}
