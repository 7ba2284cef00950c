//! Auth Pages
//!
//! Login, registration and password flows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CompleteRegistrationArgs, RegisterArgs};
use crate::components::{Link, TextField};
use crate::context::{use_router, use_session};
use crate::forms::{new_passwords_match, passwords_match, require};
use crate::routes::Route;
use crate::store::use_toasts;

#[component]
fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Link to=Route::Home class="brand">"Yego SheCan"</Link>
                <h1 class="auth-title">{title}</h1>
                {children()}
            </div>
        </div>
    }
}

fn submit_label(busy: bool, idle: &'static str, working: &'static str) -> &'static str {
    if busy { working } else { idle }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (email, password) = (email.get_untracked(), password.get_untracked());
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(response) => {
                    toasts.success("Login successful!");
                    session.login(&response.token, response.user);
                }
                Err(err) => toasts.error(err.user_message("Login failed")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Welcome back">
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Email" value=email input_type="email" disabled=submitting required=true />
                <TextField label="Password" value=password input_type="password" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Log in", "Logging in...")}
                </button>
            </form>
            <div class="auth-links">
                <Link to=Route::ForgotPassword>"Forgot password?"</Link>
                <Link to=Route::Register>"Create an account"</Link>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let gender = RwSignal::new("Female".to_string());
    let age = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(err) = passwords_match(&password.get_untracked(), &confirm.get_untracked()) {
            toasts.error(err.to_string());
            return;
        }
        let args = RegisterArgs {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            gender: gender.get_untracked(),
            age: age.get_untracked().trim().parse().ok(),
        };
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.register(&args).await {
                Ok(_) => {
                    toasts.success("Registration successful! Please check your email to verify.");
                    router.navigate(Route::Login);
                }
                Err(err) => toasts.error(err.user_message("Registration failed. Please try again.")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Create your account">
            <form class="auth-form" on:submit=on_submit>
                <div class="form-row">
                    <TextField label="First name" value=first_name disabled=submitting required=true />
                    <TextField label="Last name" value=last_name disabled=submitting required=true />
                </div>
                <TextField label="Username" value=username disabled=submitting required=true />
                <TextField label="Email" value=email input_type="email" disabled=submitting required=true />
                <div class="form-row">
                    <label class="form-field">
                        <span class="form-label">"Gender"</span>
                        <select
                            class="form-input"
                            disabled=move || submitting.get()
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="Female">"Female"</option>
                            <option value="Male">"Male"</option>
                        </select>
                    </label>
                    <TextField label="Age" value=age input_type="number" disabled=submitting />
                </div>
                <TextField label="Password" value=password input_type="password" disabled=submitting required=true />
                <TextField label="Confirm password" value=confirm input_type="password" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Sign up", "Creating account...")}
                </button>
            </form>
            <div class="auth-links">
                <span>"Already have an account?"</span>
                <Link to=Route::Login>"Log in"</Link>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        if let Err(err) = require(&[("your email", address.as_str())]) {
            toasts.error(err.to_string());
            return;
        }
        submitting.set(true);
        toasts.info("Sending reset link...");
        let api = session.api();
        spawn_local(async move {
            match api.forgot_password(&address).await {
                Ok(_) => {
                    toasts.success("If an account with that email exists, a reset link has been sent.");
                    let _ = email.try_set(String::new());
                }
                Err(_) => toasts.error("An error occurred. Please try again."),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Forgot your password?">
            <p class="auth-hint">"Enter your email and we'll send you a reset link."</p>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="Email" value=email input_type="email" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Send reset link", "Sending...")}
                </button>
            </form>
            <div class="auth-links">
                <Link to=Route::Login>"Back to login"</Link>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn ResetPasswordPage(token: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let token = StoredValue::new(token);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (password, confirm) = (password.get_untracked(), confirm.get_untracked());
        if let Err(err) = passwords_match(&password, &confirm) {
            toasts.error(err.to_string());
            return;
        }
        submitting.set(true);
        let api = session.api();
        let token = token.get_value();
        spawn_local(async move {
            match api.reset_password(&token, &password, &confirm).await {
                Ok(_) => {
                    toasts.success("Password reset successfully! You can now log in.");
                    router.navigate(Route::Login);
                }
                Err(err) => toasts.error(err.user_message("Failed to reset password. The link may have expired.")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Choose a new password">
            <form class="auth-form" on:submit=on_submit>
                <TextField label="New password" value=password input_type="password" disabled=submitting required=true />
                <TextField label="Confirm new password" value=confirm input_type="password" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Reset password", "Resetting...")}
                </button>
            </form>
        </AuthCard>
    }
}

/// Invited mentors finish their account here.
#[component]
pub fn CompleteRegistrationPage(token: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let token = StoredValue::new(token);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(err) = passwords_match(&password.get_untracked(), &confirm.get_untracked()) {
            toasts.error(err.to_string());
            return;
        }
        let args = CompleteRegistrationArgs {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        submitting.set(true);
        let api = session.api();
        let token = token.get_value();
        spawn_local(async move {
            match api.complete_registration(&token, &args).await {
                Ok(_) => {
                    toasts.success("Registration completed successfully! You can now log in.");
                    router.navigate(Route::Login);
                }
                Err(err) => toasts.error(err.user_message("Failed to complete registration.")),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <AuthCard title="Complete your registration">
            <form class="auth-form" on:submit=on_submit>
                <div class="form-row">
                    <TextField label="First name" value=first_name disabled=submitting required=true />
                    <TextField label="Last name" value=last_name disabled=submitting required=true />
                </div>
                <TextField label="Username" value=username disabled=submitting required=true />
                <TextField label="Password" value=password input_type="password" disabled=submitting required=true />
                <TextField label="Confirm password" value=confirm input_type="password" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Complete registration", "Saving...")}
                </button>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toasts = use_toasts();
    let previous = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (old, new, again) = (previous.get_untracked(), new_password.get_untracked(), confirm.get_untracked());
        if let Err(err) = new_passwords_match(&new, &again) {
            toasts.error(err.to_string());
            return;
        }
        submitting.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.change_password(&old, &new, &again).await {
                Ok(response) => {
                    toasts.success(response.message.unwrap_or_else(|| "Password changed successfully!".to_string()));
                    router.navigate(Route::AdminProfile);
                }
                Err(err) => session.report(&err, "Failed to change password."),
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <section class="page">
            <h1 class="page-title">"Change Password"</h1>
            <form class="card form-card" on:submit=on_submit>
                <TextField label="Current password" value=previous input_type="password" disabled=submitting required=true />
                <TextField label="New password" value=new_password input_type="password" disabled=submitting required=true />
                <TextField label="Confirm new password" value=confirm input_type="password" disabled=submitting required=true />
                <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), "Change password", "Saving...")}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false, "Log in", "Logging in..."), "Log in");
        assert_eq!(submit_label(true, "Log in", "Logging in..."), "Logging in...");
    }
}
