use std::path::PathBuf;

use axum::{
    extract::{Form, State},
    http::{StatusCode, header},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration as CookieDuration;
use serde::Deserialize;
use tracing::{info, warn};

use crate::web::{ApiError, AppState, bad_request, json_error};

pub const AUTH_COOKIE: &str = "auth_code";
pub const VIEW_PATH: &str = "/view/";

/// Authenticated caller, resolved once per request from the auth cookie.
/// Only the storage root travels with it; the code stays in the cookie.
#[derive(Clone, Debug)]
pub struct Tenant {
    pub root: PathBuf,
}

#[derive(Deserialize)]
pub struct GenerateCodeForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub access_code: Option<String>,
}

pub async fn generate_code(
    State(state): State<AppState>,
    Form(form): Form<GenerateCodeForm>,
) -> Result<impl IntoResponse, ApiError> {
    let name = non_blank_field(form.name.as_deref(), "Name and date are required.")?;
    let date = non_blank_field(form.date.as_deref(), "Name and date are required.")?;

    let code = state.codes().generate(name, date);
    info!("generated access code");

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("{code}\n"),
    ))
}

pub async fn process_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let code = required_field(form.access_code.as_deref(), "Access code is required.")?;

    if !state.codes().validate(code) {
        warn!("rejected login with unknown access code");
        return Err(json_error(StatusCode::UNAUTHORIZED, "Invalid access code."));
    }

    let mut cookie = Cookie::new(AUTH_COOKIE, code.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to(VIEW_PATH)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let mut removal = Cookie::new(AUTH_COOKIE, "");
    removal.set_path("/");
    removal.set_http_only(true);
    removal.set_same_site(SameSite::Lax);
    removal.set_max_age(CookieDuration::seconds(0));

    (jar.remove(removal), Redirect::to(VIEW_PATH))
}

/// Returns the tenant for a valid auth cookie, or `None`.
pub fn current_tenant(state: &AppState, jar: &CookieJar) -> Option<Tenant> {
    let code = jar.get(AUTH_COOKIE)?.value();
    if !state.codes().validate(code) {
        return None;
    }

    Some(Tenant {
        root: state.tenant_root(code),
    })
}

/// Gate for the folder endpoints: a missing or unknown code is a 401.
pub fn require_tenant(state: &AppState, jar: &CookieJar) -> Result<Tenant, ApiError> {
    if jar.get(AUTH_COOKIE).is_none() {
        return Err(json_error(
            StatusCode::UNAUTHORIZED,
            "Not authenticated. Please log in.",
        ));
    }

    current_tenant(state, jar).ok_or_else(|| {
        json_error(
            StatusCode::UNAUTHORIZED,
            "Access code is invalid or expired. Please log in again.",
        )
    })
}

/// Like [`required_field`] but hands back the value as submitted, since the
/// code is the encoding of exactly what the user typed.
fn non_blank_field<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| bad_request(message))
}

fn required_field<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| bad_request(message))
}
