use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;

use crate::web::{AppState, auth, render_access_page, render_workspace_page};

/// Serves the workspace to holders of a valid code and the access page to
/// everyone else. Cookie problems never turn into errors here.
pub async fn view_page(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    if auth::current_tenant(&state, &jar).is_some() {
        Html(render_workspace_page())
    } else {
        Html(render_access_page())
    }
}
