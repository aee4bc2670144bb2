//! Client-side routes
//!
//! Two screens: the generation form at `/` and the player at
//! `/player/{script_id}`. Anything unrecognised falls back to the form.

use std::fmt;

const PLAYER_PREFIX: &str = "/player/";

/// A screen of the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Index,
    Player {
        script_id: String,
    },
}

impl Route {
    pub fn player(script_id: impl Into<String>) -> Self {
        Route::Player {
            script_id: script_id.into(),
        }
    }

    /// Parse a route path; unknown paths map to [`Route::Index`]
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        match path.strip_prefix(PLAYER_PREFIX) {
            Some(rest) => {
                let id = rest.trim_end_matches('/');
                if id.is_empty() || id.contains('/') {
                    Route::Index
                } else {
                    Route::player(id)
                }
            }
            None => Route::Index,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Player { script_id } => format!("{PLAYER_PREFIX}{script_id}"),
        }
    }

    pub fn script_id(&self) -> Option<&str> {
        match self {
            Route::Index => None,
            Route::Player { script_id } => Some(script_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Index);
        assert_eq!(Route::parse("/player/abc123"), Route::player("abc123"));
        assert_eq!(Route::parse("/player/abc123/"), Route::player("abc123"));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_index() {
        assert_eq!(Route::parse(""), Route::Index);
        assert_eq!(Route::parse("/player/"), Route::Index);
        assert_eq!(Route::parse("/player/a/b"), Route::Index);
        assert_eq!(Route::parse("/settings"), Route::Index);
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::player("xyz");
        assert_eq!(route.path(), "/player/xyz");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::Index.to_string(), "/");
    }
}
