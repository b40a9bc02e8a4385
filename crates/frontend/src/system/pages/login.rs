use contracts::system::auth::{LoginRequest, LOGIN_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::layout::use_notices;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (remember_me, set_remember_me) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            // Simulated authentication round-trip
            TimeoutFuture::new(LOGIN_DELAY_MS).await;

            match do_login(request, set_auth_state) {
                Ok(session) => {
                    log::info!("admin signed in as {}", session.login);
                    notices.success("Login Successful", "Welcome back, Admin!");
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("login rejected: {}", e);
                    notices.error("Login Failed", e.clone());
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-brand">
                    <div class="login-brand__logo">{icon("building")}</div>
                    <h1>"City Hall"</h1>
                    <p>"Attendance Management System"</p>
                </div>

                <h2>"Admin Login"</h2>
                <p class="login-box__hint">"Enter your credentials to access the system"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@cityhall.gov"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="form-group__password">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="form-group__reveal"
                                title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                            </button>
                        </div>
                    </div>

                    <div class="form-group form-group--inline">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| notices.info("Password reset", "Contact IT Support to reset your password.")
                        >
                            "Forgot password?"
                        </button>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo Credentials:"</p>
                    <p>"Email: " <strong>"admin@cityhall.gov"</strong></p>
                    <p>"Password: " <strong>"admin123"</strong></p>
                </div>

                <div class="login-footer">
                    <p>"Need help? Contact IT Support"</p>
                    <p>"© 2024 City Hall. All rights reserved."</p>
                </div>
            </div>
        </div>
    }
}
