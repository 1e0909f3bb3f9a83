//! View routing.
//!
//! # Responsibilities
//! - Map a navigation path to a named view, with one dynamic segment for
//!   document identifiers and a catch-all redirect to `/`
//! - Strip the configured deployment base path before matching
//! - Compute the page title for a matched route
//!
//! # Design Decisions
//! - Static table scanned in order; explicit redirect rather than a
//!   silent default
//! - No regex — four fixed patterns match on path segments
//! - Title computation is pure; the title side effect happens once per
//!   navigation through the caller-supplied sink in [`Router::navigate`]

use crate::config::RoutingSettings;

pub const PRODUCT_NAME: &str = "HITL Document Extractor";

/// Where unmatched paths are sent.
const REDIRECT_TARGET: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    DocumentList,
    DocumentAnnotation,
    Dashboard,
    Models,
}

struct RouteDef {
    path: &'static str,
    name: &'static str,
    view: View,
    title: Option<&'static str>,
}

const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        name: "DocumentList",
        view: View::DocumentList,
        title: Some("Documents"),
    },
    RouteDef {
        path: "/documents/:id",
        name: "DocumentAnnotation",
        view: View::DocumentAnnotation,
        title: Some("Annotate Document"),
    },
    RouteDef {
        path: "/dashboard",
        name: "Dashboard",
        view: View::Dashboard,
        title: Some("Dashboard"),
    },
    RouteDef {
        path: "/models",
        name: "Models",
        view: View::Models,
        title: Some("Models"),
    },
];

/// A matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    /// Value captured by the dynamic segment, when the route has one.
    pub document_id: Option<String>,
    pub title: Option<&'static str>,
}

impl RouteMatch {
    /// Pure title computation: `"{title} - HITL Document Extractor"`, or
    /// the bare product name for routes without title metadata. Applying
    /// the result to a window is the caller's concern; see
    /// [`Router::navigate`].
    pub fn page_title(&self) -> String {
        match self.title {
            Some(title) => format!("{} - {}", title, PRODUCT_NAME),
            None => PRODUCT_NAME.to_string(),
        }
    }
}

/// Outcome of resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    View(RouteMatch),
    Redirect(&'static str),
}

pub struct Router {
    base_path: String,
}

impl Router {
    pub fn new(settings: RoutingSettings) -> Self {
        Self {
            base_path: settings.base_path,
        }
    }

    /// Resolve a path against the route table. Unmatched paths resolve to
    /// a redirect to `/`; there is no other rejected transition.
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.lookup(path) {
            Some(matched) => Resolution::View(matched),
            None => Resolution::Redirect(REDIRECT_TARGET),
        }
    }

    /// Resolve a navigation request, following the catch-all redirect, and
    /// apply the page title through `set_title` exactly once before
    /// returning the view to render. Navigation always completes: no
    /// guards, no cancellation.
    pub fn navigate(&self, path: &str, set_title: impl FnOnce(&str)) -> RouteMatch {
        let matched = self.lookup(path).unwrap_or_else(|| {
            tracing::debug!(path = %path, "Unmatched path, redirecting to document list");
            self.lookup(REDIRECT_TARGET)
                .expect("redirect target is a routed path")
        });
        set_title(&matched.page_title());
        matched
    }

    fn lookup(&self, path: &str) -> Option<RouteMatch> {
        let path = self.strip_base(path);
        ROUTES.iter().find_map(|route| {
            match_path(route.path, path).map(|document_id| RouteMatch {
                name: route.name,
                view: route.view,
                document_id,
                title: route.title,
            })
        })
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

/// Match a path against a pattern, segment by segment. A `:name` segment
/// captures exactly one non-empty path segment. Trailing slashes are
/// tolerated. Returns the captured segment on a match.
fn match_path(pattern: &str, path: &str) -> Option<Option<String>> {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    let mut captured = None;
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(captured),
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    captured = Some(actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(RoutingSettings {
            base_path: "/".to_string(),
        })
    }

    #[test]
    fn root_renders_document_list_with_title() {
        let matched = router().navigate("/", |_| {});
        assert_eq!(matched.view, View::DocumentList);
        assert_eq!(matched.name, "DocumentList");
        assert_eq!(matched.page_title(), "Documents - HITL Document Extractor");
    }

    #[test]
    fn document_path_captures_identifier() {
        let matched = router().navigate("/documents/abc123", |_| {});
        assert_eq!(matched.view, View::DocumentAnnotation);
        assert_eq!(matched.document_id.as_deref(), Some("abc123"));
        assert_eq!(
            matched.page_title(),
            "Annotate Document - HITL Document Extractor"
        );
    }

    #[test]
    fn static_routes_resolve() {
        match router().resolve("/dashboard") {
            Resolution::View(matched) => assert_eq!(matched.view, View::Dashboard),
            other => panic!("expected dashboard view, got {:?}", other),
        }
        match router().resolve("/models/") {
            Resolution::View(matched) => assert_eq!(matched.view, View::Models),
            other => panic!("expected models view, got {:?}", other),
        }
    }

    #[test]
    fn unknown_paths_redirect_to_root() {
        assert_eq!(router().resolve("/nope"), Resolution::Redirect("/"));
        assert_eq!(
            router().resolve("/documents/a/b"),
            Resolution::Redirect("/")
        );
        assert_eq!(router().resolve("/documents"), Resolution::Redirect("/"));
    }

    #[test]
    fn navigation_to_unknown_path_lands_on_document_list() {
        let mut title = String::new();
        let matched = router().navigate("/does/not/exist", |t| title = t.to_string());
        assert_eq!(matched.view, View::DocumentList);
        assert_eq!(title, "Documents - HITL Document Extractor");
    }

    #[test]
    fn title_falls_back_to_product_name() {
        let matched = RouteMatch {
            name: "Untitled",
            view: View::Dashboard,
            document_id: None,
            title: None,
        };
        assert_eq!(matched.page_title(), PRODUCT_NAME);
    }

    #[test]
    fn base_path_is_stripped_before_matching() {
        let router = Router::new(RoutingSettings {
            base_path: "/extractor".to_string(),
        });
        let matched = router.navigate("/extractor/documents/doc-9", |_| {});
        assert_eq!(matched.document_id.as_deref(), Some("doc-9"));

        match router.resolve("/extractor") {
            Resolution::View(matched) => assert_eq!(matched.view, View::DocumentList),
            other => panic!("expected document list, got {:?}", other),
        }
    }

    #[test]
    fn title_sink_is_invoked_exactly_once() {
        let mut calls = 0;
        router().navigate("/dashboard", |_| calls += 1);
        assert_eq!(calls, 1);
    }
}
