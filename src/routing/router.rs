//! Route table construction, resolution, and navigation.

use std::collections::HashSet;

use tracing::debug;

use crate::error::RouteError;
use crate::metrics;

use super::config::RouteConfig;
use super::history::History;

/// A single path-to-view binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    view: V,
}

impl<V> Route<V> {
    /// The bound path (begins with `/`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The bound view.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Builder assembling a validated route table.
#[derive(Debug, Clone)]
pub struct RouterBuilder<V> {
    routes: Vec<Route<V>>,
    not_found: Option<V>,
    version: Option<u32>,
}

impl<V> Default for RouterBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            not_found: None,
            version: None,
        }
    }
}

impl<V> RouterBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a route binding `path` to `view`.
    ///
    /// Entries are checked in [`build`](Self::build) so a bad one is
    /// reported against the whole table, not the call site.
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push(Route {
            path: path.into(),
            view,
        });
        self
    }

    /// Set the view navigated to when no route matches.
    pub fn not_found(mut self, view: V) -> Self {
        self.not_found = Some(view);
        self
    }

    /// Tag the table with the configuration revision it was built from.
    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Validate the declared routes and produce a navigable router.
    ///
    /// Paths must begin with `/` and be unique within the table. Both are
    /// configuration mistakes and are rejected here, before any navigation
    /// can happen.
    pub fn build(self) -> Result<Router<V>, RouteError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath {
                    path: route.path.clone(),
                });
            }
            if !seen.insert(route.path.as_str()) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.clone(),
                });
            }
        }

        debug!(
            routes = self.routes.len(),
            version = ?self.version,
            "route table built"
        );

        Ok(Router {
            routes: self.routes,
            not_found: self.not_found,
            version: self.version,
            history: History::new(),
        })
    }
}

/// Immutable route table plus navigation state.
///
/// Resolution is exact-match with first declaration winning. The table
/// never changes after [`RouterBuilder::build`]; navigation only mutates
/// the attached [`History`].
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    not_found: Option<V>,
    version: Option<u32>,
    history: History,
}

impl<V> Router<V> {
    /// Start building a route table.
    pub fn builder() -> RouterBuilder<V> {
        RouterBuilder::new()
    }

    /// Resolve a path to its bound view.
    ///
    /// Unknown paths yield `None`. The not-found fallback view is a
    /// navigation concern and is not applied here.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.routes.iter().find(|r| r.path == path).map(|r| &r.view)
    }

    /// Navigate to a path, recording it in history.
    ///
    /// An unknown path navigates to the not-found fallback when one was
    /// declared; the requested path is still recorded, as a browser keeps
    /// the typed URL. Without a fallback the navigation fails and history
    /// is left untouched.
    pub fn navigate(&mut self, path: &str) -> Result<&V, RouteError> {
        let view = Self::match_or_fallback(&self.routes, &self.not_found, path)?;
        self.history.push(path);
        Ok(view)
    }

    /// Navigate to a path, replacing the current history entry instead of
    /// pushing a new one. Same matching rules as [`navigate`](Self::navigate).
    pub fn replace(&mut self, path: &str) -> Result<&V, RouteError> {
        let view = Self::match_or_fallback(&self.routes, &self.not_found, path)?;
        self.history.replace(path);
        Ok(view)
    }

    /// Go back one history entry and return the view now current.
    ///
    /// Returns `None` without moving when already at the oldest entry.
    pub fn back(&mut self) -> Option<&V> {
        let path = self.history.back()?;
        Self::lookup(&self.routes, &self.not_found, path)
    }

    /// Go forward one history entry and return the view now current.
    ///
    /// Returns `None` without moving when already at the newest entry.
    pub fn forward(&mut self) -> Option<&V> {
        let path = self.history.forward()?;
        Self::lookup(&self.routes, &self.not_found, path)
    }

    /// Path of the current history entry.
    pub fn current_path(&self) -> Option<&str> {
        self.history.current()
    }

    /// View for the current history entry, if any.
    pub fn current_view(&self) -> Option<&V> {
        let path = self.history.current()?;
        Self::lookup(&self.routes, &self.not_found, path)
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table declares no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Declared routes in matching order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// The not-found fallback view, if declared.
    pub fn not_found_view(&self) -> Option<&V> {
        self.not_found.as_ref()
    }

    /// Configuration revision the table was built from, if tagged.
    pub fn version(&self) -> Option<u32> {
        self.version
    }

    /// Navigation history, read-only.
    pub fn history(&self) -> &History {
        &self.history
    }

    // The helpers take fields rather than `&self` so callers holding a
    // mutable borrow of the history can still resolve against the table.

    // Navigation-entry matching: counts the miss and fails without a
    // fallback.
    fn match_or_fallback<'a>(
        routes: &'a [Route<V>],
        fallback: &'a Option<V>,
        path: &str,
    ) -> Result<&'a V, RouteError> {
        match routes.iter().find(|r| r.path == path) {
            Some(route) => Ok(&route.view),
            None => {
                metrics::inc_route_not_found();
                let view = fallback.as_ref().ok_or_else(|| RouteError::NotFound {
                    path: path.to_string(),
                })?;
                debug!(path, "no route matched, navigating to fallback view");
                Ok(view)
            }
        }
    }

    // Cursor-move matching: entries already in history were counted when
    // first navigated, so misses here stay silent.
    fn lookup<'a>(routes: &'a [Route<V>], fallback: &'a Option<V>, path: &str) -> Option<&'a V> {
        routes
            .iter()
            .find(|r| r.path == path)
            .map(|r| &r.view)
            .or(fallback.as_ref())
    }
}

impl Router<String> {
    /// Build a router from a versioned route configuration, binding each
    /// path to its view identifier.
    pub fn from_config(config: &RouteConfig) -> Result<Self, RouteError> {
        let mut builder = Router::builder().version(config.version);
        for entry in &config.routes {
            builder = builder.route(entry.path.clone(), entry.view.clone());
        }
        if let Some(view) = &config.not_found {
            builder = builder.not_found(view.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::config::RouteEntry;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        List,
        Missing,
    }

    fn test_router() -> Router<View> {
        Router::builder()
            .route("/home", View::Home)
            .route("/list", View::List)
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_returns_bound_view() {
        let router = test_router();
        assert_eq!(router.resolve("/home"), Some(&View::Home));
        assert_eq!(router.resolve("/list"), Some(&View::List));
    }

    #[test]
    fn resolve_unknown_path_is_none() {
        let router = test_router();
        assert_eq!(router.resolve("/missing"), None);
    }

    #[test]
    fn routes_iterate_in_declaration_order() {
        let router = test_router();
        let declared: Vec<(&str, &View)> =
            router.routes().map(|r| (r.path(), r.view())).collect();
        assert_eq!(declared, vec![("/home", &View::Home), ("/list", &View::List)]);
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let router = Router::builder()
            .route("/Home", View::Home)
            .build()
            .unwrap();
        assert_eq!(router.resolve("/Home"), Some(&View::Home));
        assert_eq!(router.resolve("/home"), None);
    }

    #[test]
    fn build_rejects_duplicate_paths() {
        let result = Router::builder()
            .route("/home", View::Home)
            .route("/home", View::List)
            .build();
        assert!(matches!(result, Err(RouteError::DuplicatePath { .. })));
    }

    #[test]
    fn build_rejects_path_without_leading_slash() {
        let result = Router::builder().route("home", View::Home).build();
        assert!(matches!(result, Err(RouteError::InvalidPath { .. })));
    }

    #[test]
    fn construction_leaves_history_untouched() {
        let router = test_router();
        assert!(router.history().is_empty());
        assert_eq!(router.current_path(), None);
        assert_eq!(router.current_view(), None);
    }

    #[test]
    fn navigate_records_history() {
        let mut router = test_router();
        let view = router.navigate("/home").unwrap();
        assert_eq!(view, &View::Home);
        assert_eq!(router.current_path(), Some("/home"));
        assert_eq!(router.current_view(), Some(&View::Home));

        router.navigate("/list").unwrap();
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn navigate_unknown_without_fallback_fails_and_keeps_history() {
        let mut router = test_router();
        router.navigate("/home").unwrap();

        let result = router.navigate("/missing");
        assert!(matches!(result, Err(RouteError::NotFound { .. })));
        assert_eq!(router.current_path(), Some("/home"));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn navigate_unknown_with_fallback_keeps_requested_path() {
        let mut router = Router::builder()
            .route("/home", View::Home)
            .not_found(View::Missing)
            .build()
            .unwrap();

        let view = router.navigate("/nope").unwrap();
        assert_eq!(view, &View::Missing);
        assert_eq!(router.current_path(), Some("/nope"));
        assert_eq!(router.current_view(), Some(&View::Missing));
    }

    #[test]
    fn replace_swaps_current_history_entry() {
        let mut router = test_router();
        router.navigate("/home").unwrap();
        router.navigate("/list").unwrap();

        let view = router.replace("/home").unwrap();
        assert_eq!(view, &View::Home);
        assert_eq!(router.current_path(), Some("/home"));
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn back_and_forward_return_views() {
        let mut router = test_router();
        router.navigate("/home").unwrap();
        router.navigate("/list").unwrap();

        assert_eq!(router.back(), Some(&View::Home));
        assert_eq!(router.current_path(), Some("/home"));
        assert_eq!(router.back(), None);
        assert_eq!(router.forward(), Some(&View::List));
        assert_eq!(router.forward(), None);
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let router: Router<View> = Router::builder().build().unwrap();
        assert!(router.is_empty());
        assert_eq!(router.resolve("/home"), None);
    }

    #[test]
    fn from_config_builds_string_router() {
        let config = RouteConfig {
            version: 3,
            routes: vec![
                RouteEntry {
                    path: "/home".to_string(),
                    view: "HomeView".to_string(),
                },
                RouteEntry {
                    path: "/list".to_string(),
                    view: "ListView".to_string(),
                },
            ],
            not_found: Some("NotFoundView".to_string()),
        };

        let router = Router::from_config(&config).unwrap();
        assert_eq!(router.version(), Some(3));
        assert_eq!(router.len(), 2);
        assert_eq!(router.resolve("/list").map(String::as_str), Some("ListView"));
        assert_eq!(
            router.not_found_view().map(String::as_str),
            Some("NotFoundView")
        );
    }

    #[test]
    fn from_config_rejects_bad_entries() {
        let config = RouteConfig {
            version: 1,
            routes: vec![
                RouteEntry {
                    path: "/home".to_string(),
                    view: "HomeView".to_string(),
                },
                RouteEntry {
                    path: "/home".to_string(),
                    view: "OtherView".to_string(),
                },
            ],
            not_found: None,
        };
        assert!(matches!(
            Router::from_config(&config),
            Err(RouteError::DuplicatePath { .. })
        ));
    }
}
