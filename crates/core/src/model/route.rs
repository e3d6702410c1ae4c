use serde::Serialize;

use crate::model::project::{Project, project_by_id};

const PROJECT_PREFIX: &str = "/projetos/";

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "id", rename_all = "lowercase")]
pub enum Route {
    Home,
    Project(String),
}

/// Result of matching a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// The path was unknown and the host should replace it with `/`.
    pub redirected: bool,
}

impl Route {
    /// Match `path` (query and fragment ignored). Unknown paths redirect
    /// to home.
    pub fn resolve(path: &str) -> Resolved {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.is_empty() || path == "/" {
            return Resolved {
                route: Route::Home,
                redirected: false,
            };
        }

        if let Some(rest) = path.strip_prefix(PROJECT_PREFIX) {
            let id = rest.strip_suffix('/').unwrap_or(rest);
            if !id.is_empty() && !id.contains('/') {
                return Resolved {
                    route: Route::Project(id.to_string()),
                    redirected: false,
                };
            }
        }

        Resolved {
            route: Route::Home,
            redirected: true,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Project(id) => format!("{PROJECT_PREFIX}{id}"),
        }
    }
}

/// What the project detail route renders.
#[derive(Debug, Clone, Copy)]
pub enum ProjectView {
    Found(&'static Project),
    /// Unknown id: a "not found" card linking back to home.
    NotFound,
}

impl ProjectView {
    pub fn for_id(id: &str) -> Self {
        match project_by_id(id) {
            Some(project) => ProjectView::Found(project),
            None => ProjectView::NotFound,
        }
    }

    pub fn project(&self) -> Option<&'static Project> {
        match self {
            ProjectView::Found(p) => Some(p),
            ProjectView::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_home() {
        assert_eq!(
            Route::resolve("/"),
            Resolved {
                route: Route::Home,
                redirected: false
            }
        );
        assert_eq!(Route::resolve("/?ref=cv").route, Route::Home);
    }

    #[test]
    fn project_paths_capture_id() {
        assert_eq!(
            Route::resolve("/projetos/rotaz").route,
            Route::Project("rotaz".into())
        );
        assert_eq!(
            Route::resolve("/projetos/rotaz/").route,
            Route::Project("rotaz".into())
        );
        assert_eq!(Route::Project("rotaz".into()).path(), "/projetos/rotaz");
    }

    #[test]
    fn unknown_paths_redirect_home() {
        for path in ["/blog", "/projetos/", "/projetos/a/b", "/projetos"] {
            let resolved = Route::resolve(path);
            assert_eq!(resolved.route, Route::Home, "{path}");
            assert!(resolved.redirected, "{path}");
        }
    }

    #[test]
    fn unknown_project_is_not_found_not_error() {
        assert!(ProjectView::for_id("nope").project().is_none());
        assert_eq!(
            ProjectView::for_id("ownfleet-cg").project().map(|p| p.title),
            Some("OwnFleet CG - Loading Automation")
        );
    }
}
