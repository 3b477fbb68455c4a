//! Client Portal Component
//!
//! Access-code gate in front of the client deliverables grid. The code
//! check runs through the core's AccessProvider seam, so swapping the demo
//! token for a real authorization service leaves this component untouched.

use dioxus::prelude::*;
use stillframe_core::{AccessGate, DemoAccess};

use crate::components::{icons, Button, ButtonVariant};
use crate::context::use_catalog;

#[component]
pub fn ClientPortal() -> Element {
    let catalog = use_catalog();
    let mut gate = use_signal(AccessGate::new);
    let mut code = use_signal(String::new);

    let unlock = move |_| {
        let provider = DemoAccess::new(&catalog());
        let submitted = code();
        gate.write().submit(&provider, &submitted);
    };

    let state = gate();

    rsx! {
        section { id: "clients", class: "section",
            div { class: "section-inner section-inner--narrow",
                div { class: "section-head",
                    {icons::shield(20)}
                    h2 { class: "section-title", "Client Galleries" }
                }

                if !state.is_unlocked() {
                    div { class: "portal-card",
                        div { class: "portal-form",
                            div {
                                label {
                                    class: "field-label",
                                    r#for: "access-code",
                                    "Enter your access code"
                                }
                                input {
                                    id: "access-code",
                                    class: "text-input",
                                    r#type: "text",
                                    placeholder: "e.g., DEMO",
                                    value: "{code()}",
                                    oninput: move |e| code.set(e.value()),
                                }
                                if let Some(err) = state.error() {
                                    p { class: "error-text", "{err}. Try 'demo'." }
                                }
                            }

                            Button { onclick: unlock,
                                {icons::lock(16)}
                                "Unlock"
                            }
                        }

                        p { class: "hint-text",
                            "Use "
                            code { "demo" }
                            " to preview. The fixed code is a stand-in for a real authorization service."
                        }
                    }
                } else {
                    div {
                        p { class: "section-sub",
                            "Welcome! Here are your deliverables (sample). Swap these for downloadable archives or gallery links."
                        }

                        div { class: "deliverable-grid",
                            for photo in state.deliverables().unwrap_or_default().iter() {
                                {
                                    let photo_id = photo.id.clone();
                                    rsx! {
                                        div { key: "{photo.id}", class: "deliverable-card",
                                            img { src: "{photo.src}", alt: "{photo.title_str()}" }
                                            div { class: "deliverable-card__body",
                                                div { class: "photo-card__title", "{photo.title_str()}" }
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| {
                                                        tracing::info!(photo = %photo_id, "deliverable download requested");
                                                    },
                                                    "Download"
                                                    {icons::external_link(16)}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
