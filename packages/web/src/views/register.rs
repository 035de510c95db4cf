//! Registration page view with role, contact and password fields.

use api::{RegistrationController, RegistrationForm, Role};
use dioxus::prelude::*;
use ui::icons::{FaEnvelope, FaLock, FaPencil, FaPhone, FaUser};
use ui::{notify, use_api, use_session, use_toasts, FormField, Icon, SignalSession};

use crate::Route;

const REGISTER_CSS: Asset = asset!("/assets/auth.css");

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let api = use_api();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(RegistrationForm::default);
    let mut submitting = use_signal(|| false);
    let redirecting = RegistrationController::new(&api, SignalSession::new(session))
        .guard()
        .is_some();

    // Already signed in (or just registered): go home instead
    let guard_api = api.clone();
    use_effect(move || {
        let controller = RegistrationController::new(&guard_api, SignalSession::new(session));
        if let Some(destination) = controller.guard() {
            nav.replace(Route::from(destination));
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            let mut draft = form();
            let mut controller = RegistrationController::new(api, SignalSession::new(session));
            let notice = controller.submit(&mut draft).await;
            if notice.is_success() {
                form.set(draft);
            }
            notify(&mut toasts, &notice);
            submitting.set(false);
        });
    };

    // Same check as the effect, so the form never flashes before the redirect
    if redirecting {
        return rsx! {};
    }

    let fields = form();

    rsx! {
        document::Stylesheet { href: REGISTER_CSS }

        section {
            class: "auth-page",
            div {
                class: "container",
                div {
                    class: "header",
                    h1 { class: "brand", "JobZee" }
                    h3 { "Create a new account" }
                }

                form {
                    onsubmit: handle_register,

                    div {
                        class: "input-tag",
                        label { r#for: "role", "Register As" }
                        div {
                            class: "input-tag__control",
                            select {
                                id: "role",
                                value: "{fields.role}",
                                required: true,
                                onchange: move |evt: FormEvent| form.write().role = evt.value(),
                                option { value: "", disabled: true, "Select Role" }
                                for role in Role::ALL {
                                    option { value: "{role}", "{role}" }
                                }
                            }
                            Icon { icon: FaUser, width: 16, height: 16 }
                        }
                    }

                    FormField {
                        id: "name",
                        label: "Name",
                        placeholder: "Your Name",
                        value: fields.name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        icon: rsx! { Icon { icon: FaPencil, width: 16, height: 16 } },
                    }

                    FormField {
                        id: "email",
                        label: "Email Address",
                        input_type: "email",
                        placeholder: "xyz@gmail.com",
                        value: fields.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        icon: rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
                    }

                    FormField {
                        id: "phone",
                        label: "Phone Number",
                        input_type: "tel",
                        placeholder: "1234567890",
                        value: fields.phone.clone(),
                        oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                        icon: rsx! { Icon { icon: FaPhone, width: 16, height: 16 } },
                    }

                    FormField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        placeholder: "Your Password",
                        value: fields.password.clone(),
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        icon: rsx! { Icon { icon: FaLock, width: 16, height: 16 } },
                    }

                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Registering..." } else { "Register" }
                    }

                    Link { to: Route::Login {}, "Login Now" }
                }
            }

            div {
                class: "banner",
                p { "Find your next role, or the people to fill it." }
            }
        }
    }
}
