//! Sign-in page: password login, sign-up with one-time code, Google redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful path resolves the auth context and pushes to `/`, where
//! the root redirector makes the access decision. The page itself never
//! inspects the role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::routes;

const OTP_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
    /// Awaiting the code sent to this address.
    VerifyOtp(String),
}

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_sign_up_input(name: &str, email: &str, phone: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email and password are required.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        password: password.to_owned(),
    })
}

fn validate_otp_input(otp: &str) -> Result<String, &'static str> {
    let otp = otp.trim();
    if otp.len() != OTP_LEN || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code.");
    }
    Ok(otp.to_owned())
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn SignInPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let completed = RwSignal::new(false);

    // Hand the decision to the root redirector once a sign-in path succeeds.
    Effect::new(move || {
        if completed.get() {
            navigate(routes::ROOT, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let finish = move |user: crate::net::types::User| {
        log::info!("signed in as {}", user.email);
        auth.set(crate::state::auth::AuthState::signed_in(user));
        completed.set(true);
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => finish(user),
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_sign_up_input(&name.get(), &email.get(), &phone.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&req).await {
                Ok(()) => {
                    otp.set(String::new());
                    info.set(format!("We sent a 6-digit code to {}.", req.email));
                    mode.set(Mode::VerifyOtp(req.email));
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Mode::VerifyOtp(target) = mode.get() else {
            return;
        };
        let code = match validate_otp_input(&otp.get()) {
            Ok(code) => code,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_otp(&target, &code).await {
                Ok(user) => finish(user),
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, code);
    };

    let switch_to = move |next: Mode| {
        info.set(String::new());
        mode.set(next);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Console"</h1>
                {move || match mode.get() {
                    Mode::SignIn => {
                        view! {
                            <p class="login-card__subtitle">"Sign in"</p>
                            <form class="login-form" on:submit=on_sign_in>
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Sign In"
                                </button>
                            </form>
                            <button class="login-link" type="button" on:click=move |_| switch_to(Mode::SignUp)>
                                "Create an account"
                            </button>
                        }
                            .into_any()
                    }
                    Mode::SignUp => {
                        view! {
                            <p class="login-card__subtitle">"Create an account"</p>
                            <form class="login-form" on:submit=on_sign_up>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Full name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="tel"
                                    placeholder="Phone (optional)"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password (8+ characters)"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Sign Up"
                                </button>
                            </form>
                            <button class="login-link" type="button" on:click=move |_| switch_to(Mode::SignIn)>
                                "Already have an account? Sign in"
                            </button>
                        }
                            .into_any()
                    }
                    Mode::VerifyOtp(target) => {
                        view! {
                            <p class="login-card__subtitle">"Enter the code sent to " {target}</p>
                            <form class="login-form" on:submit=on_verify>
                                <input
                                    class="login-input login-input--code"
                                    type="text"
                                    inputmode="numeric"
                                    maxlength="6"
                                    placeholder="123456"
                                    prop:value=move || otp.get()
                                    on:input=move |ev| otp.set(event_target_value(&ev))
                                />
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Verify"
                                </button>
                            </form>
                            <button class="login-link" type="button" on:click=move |_| switch_to(Mode::SignIn)>
                                "Back to sign in"
                            </button>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a
                    href={crate::net::api::google_auth_url()}
                    class="login-button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        crate::net::api::google_auth();
                    }
                >
                    "Continue with Google"
                </a>
            </div>
        </div>
    }
}
