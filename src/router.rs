//! Path routing
//!
//! Maps a path to exactly one view. Routes are matched segment by segment; when
//! several patterns match, the one with more literal segments wins, so the
//! order of [`ROUTES`] never matters.

use std::fmt;

/// A resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Create,
    /// `/links`
    List,
    /// `/links/:slug`
    Detail { slug: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    Create,
    List,
    Detail,
}

/// Route table: pattern → view
const ROUTES: &[(&str, RouteKind)] = &[
    ("/links/:slug", RouteKind::Detail),
    ("/links", RouteKind::List),
    ("/", RouteKind::Create),
];

impl Route {
    /// Resolve a path (query string and fragment are ignored)
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (kind, params) = ROUTES
            .iter()
            .filter_map(|(pattern, kind)| {
                match_pattern(pattern, &segments).map(|(literals, params)| (literals, *kind, params))
            })
            // 字面量段越多优先级越高；并列时取先声明的
            .fold(None, |best: Option<(usize, RouteKind, Vec<(&str, &str)>)>, candidate| {
                match best {
                    Some(b) if b.0 >= candidate.0 => Some(b),
                    _ => Some(candidate),
                }
            })
            .map(|(_, kind, params)| (kind, params))?;

        match kind {
            RouteKind::Create => Some(Route::Create),
            RouteKind::List => Some(Route::List),
            RouteKind::Detail => {
                let raw = params
                    .iter()
                    .find(|(name, _)| *name == "slug")
                    .map(|(_, value)| *value)?;
                let slug = urlencoding::decode(raw).ok()?.into_owned();
                Some(Route::Detail { slug })
            }
        }
    }

    /// The canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Create => "/".to_string(),
            Route::List => "/links".to_string(),
            Route::Detail { slug } => format!("/links/{}", urlencoding::encode(slug)),
        }
    }

    pub fn detail(slug: impl Into<String>) -> Self {
        Route::Detail { slug: slug.into() }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Create => "URL Shortener",
            Route::List => "All Shortened URLs",
            Route::Detail { .. } => "Shortened URL Details",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Match `segments` against a pattern, returning the number of literal
/// segments and the captured parameters
fn match_pattern<'p, 's>(
    pattern: &'p str,
    segments: &[&'s str],
) -> Option<(usize, Vec<(&'p str, &'s str)>)> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut literals = 0;
    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, *actual));
        } else if expected == actual {
            literals += 1;
        } else {
            return None;
        }
    }
    Some((literals, params))
}

/// Navigation history, the terminal counterpart of the browser's history stack
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() != path {
            self.entries.push(path);
        }
    }

    /// Go back one entry; `None` when already at the first entry
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic_routes() {
        assert_eq!(Route::resolve("/"), Some(Route::Create));
        assert_eq!(Route::resolve(""), Some(Route::Create));
        assert_eq!(Route::resolve("/links"), Some(Route::List));
        assert_eq!(Route::resolve("/links/abc123"), Some(Route::detail("abc123")));
    }

    #[test]
    fn test_literal_wins_over_param() {
        // "/links" must never be captured as a slug of some other pattern
        assert_eq!(Route::resolve("/links/"), Some(Route::List));
        assert_ne!(Route::resolve("/links"), Some(Route::detail("links")));
    }

    #[test]
    fn test_match_pattern_counts_literals() {
        assert_eq!(match_pattern("/links", &["links"]), Some((1, vec![])));
        assert_eq!(
            match_pattern("/links/:slug", &["links", "x"]),
            Some((1, vec![("slug", "x")]))
        );
        assert_eq!(match_pattern("/links/:slug", &["links"]), None);
        assert_eq!(match_pattern("/links", &["other"]), None);
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(Route::resolve("/links?page=2"), Some(Route::List));
        assert_eq!(Route::resolve("/links/abc#top"), Some(Route::detail("abc")));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::resolve("/nope"), None);
        assert_eq!(Route::resolve("/links/a/b"), None);
    }

    #[test]
    fn test_path_round_trip_with_encoding() {
        let route = Route::detail("a b");
        assert_eq!(route.path(), "/links/a%20b");
        assert_eq!(Route::resolve(&route.path()), Some(route));
    }

    #[test]
    fn test_history_push_and_back() {
        let mut history = History::default();
        history.push("/links");
        history.push("/links/abc");
        history.push("/links/abc");
        assert_eq!(history.len(), 3);
        assert_eq!(history.back(), Some("/links"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "/");
    }
}
