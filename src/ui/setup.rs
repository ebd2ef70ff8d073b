//! Persona setup form

use crate::app::AppState;
use crate::types::persona::PersonaConfig;
use dioxus::prelude::*;

#[component]
pub fn SetupView(#[props(!optional)] initial: Option<PersonaConfig>) -> Element {
    let mut app_state = use_context::<AppState>();

    let mut name = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    });
    let mut details = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.details.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<String>);

    let handle_save = move |_: MouseEvent| match PersonaConfig::new(name(), details()) {
        Ok(config) => {
            error.set(None);
            app_state.create_persona(config);
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    rsx! {
        div { class: "setup-screen",
            div { class: "setup-card",
                div { class: "setup-header",
                    h1 { class: "setup-title",
                        "Create Your Personal AI Bot"
                    }
                    p { class: "setup-subtitle",
                        "Fill in your details below to bring your digital twin to life."
                    }
                }

                if let Some(message) = error() {
                    div { class: "form-error",
                        "{message}"
                    }
                }

                div { class: "form-fields",
                    div {
                        label {
                            r#for: "name",
                            class: "form-label",
                            "Your Name"
                        }
                        input {
                            r#type: "text",
                            id: "name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            placeholder: "e.g., Jane Doe",
                            class: "form-input",
                        }
                    }
                    div {
                        label {
                            r#for: "details",
                            class: "form-label",
                            "About You"
                        }
                        textarea {
                            id: "details",
                            value: "{details}",
                            oninput: move |e| details.set(e.value()),
                            placeholder: "Paste all information about yourself: work, hobbies, background, interests, contact info, etc.",
                            rows: "12",
                            class: "form-input",
                        }
                    }
                }

                div { class: "form-actions",
                    button {
                        onclick: handle_save,
                        class: "primary-button",
                        "Create My Bot"
                    }
                }
            }
        }
    }
}
