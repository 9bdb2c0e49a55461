#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Map,
    List,
    Form
}

impl View {
    pub const NAV: [View; 3] = [View::Map, View::List, View::Form];

    pub fn path(self) -> &'static str {
        match self {
            View::Map => "/",
            View::List => "/liste",
            View::Form => "/form"
        }
    }

    /// Where the navigation bar sends the user. The form link always starts
    /// a fresh draft.
    pub fn nav_path(self) -> &'static str {
        match self {
            View::Form => "/ajouter",
            other => other.path()
        }
    }

    pub fn nav_title(self) -> &'static str {
        match self {
            View::Map => "Carte",
            View::List => "Liste",
            View::Form => "Ajouter"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    /// Entering the form this way drops any edit in progress.
    pub fresh: bool
}

pub fn resolve(path: &str) -> Option<Route> {
    let trimmed = path.trim_end_matches('/');
    let route = |view, fresh| Some(Route { view, fresh });

    match trimmed {
        "" => route(View::Map, false),
        "/liste" => route(View::List, false),
        "/form" => route(View::Form, false),
        "/ajouter" => route(View::Form, true),
        _ => None
    }
}
