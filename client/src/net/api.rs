//! REST helpers for the external identity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade to a signed-out console without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, SignupRequest, User, VerifyOtpRequest};

const ME: &str = "/api/auth/me";
const LOGIN: &str = "/api/auth/login";
const SIGNUP: &str = "/api/auth/signup";
const VERIFY_OTP: &str = "/api/auth/verify-otp";
const GOOGLE: &str = "/api/auth/google";
const LOGOUT: &str = "/api/auth/logout";
const REFRESH: &str = "/api/auth/refresh";

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(action: &str, reason: impl std::fmt::Display) -> String {
    format!("{action} failed: {reason}")
}

/// Endpoint that starts the backend's Google sign-in redirect flow.
pub fn google_auth_url() -> &'static str {
    GOOGLE
}

#[cfg(feature = "hydrate")]
async fn post_for_user<B: serde::Serialize>(url: &str, action: &str, body: &B) -> Result<User, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| failed_message(action, e))?
        .send()
        .await
        .map_err(|e| failed_message(action, e))?;
    if !resp.ok() {
        return Err(failed_message(action, resp.status()));
    }
    let body: super::types::AuthResponse = resp.json().await.map_err(|e| failed_message(action, e))?;
    Ok(body.user)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::AuthResponse>()
            .await
            .ok()
            .map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ME;
        None
    }
}

/// Resolve the session at mount: `me`, then one refresh + retry on failure.
pub async fn restore_session() -> Option<User> {
    if let Some(user) = fetch_current_user().await {
        return Some(user);
    }
    match refresh_token().await {
        Ok(()) => fetch_current_user().await,
        Err(_) => None,
    }
}

/// Sign in with e-mail and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    let req = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_for_user(LOGIN, "Sign-in", &req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (req, LOGIN);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`. The backend replies by
/// sending a one-time code to the e-mail address.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects it.
pub async fn signup(req: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNUP)
            .json(req)
            .map_err(|e| failed_message("Sign-up", e))?
            .send()
            .await
            .map_err(|e| failed_message("Sign-up", e))?;
        if !resp.ok() {
            return Err(failed_message("Sign-up", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (req, SIGNUP);
        Err("not available on server".to_owned())
    }
}

/// Verify a one-time code via `POST /api/auth/verify-otp`.
///
/// # Errors
///
/// Returns an error string if the request fails or the code is rejected.
pub async fn verify_otp(email: &str, otp: &str) -> Result<User, String> {
    let req = VerifyOtpRequest { email: email.to_owned(), otp: otp.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_for_user(VERIFY_OTP, "Verification", &req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (req, VERIFY_OTP);
        Err("not available on server".to_owned())
    }
}

/// Hand the browser over to the backend's Google redirect flow.
pub fn google_auth() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(google_auth_url());
        }
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOGOUT;
    }
}

/// Exchange the refresh cookie for a new session via `POST /api/auth/refresh`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend refuses the refresh.
pub async fn refresh_token() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REFRESH)
            .send()
            .await
            .map_err(|e| failed_message("Refresh", e))?;
        if !resp.ok() {
            return Err(failed_message("Refresh", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = REFRESH;
        Err("not available on server".to_owned())
    }
}
