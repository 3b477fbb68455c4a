//! Contact Section Component
//!
//! Inquiry form plus direct contact details. Submission goes through the
//! core's ContactSink seam; the demo sink only logs, so the status line is
//! honest about being a preview.

use dioxus::prelude::*;
use stillframe_core::{ContactRequest, ContactSink, LogSink};

use crate::components::{icons, Button};

#[component]
pub fn ContactSection() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    // (is_ok, text) of the last submission attempt
    let mut status: Signal<Option<(bool, String)>> = use_signal(|| None);

    let send = move |_| {
        let request = ContactRequest {
            name: name(),
            email: email(),
            message: message(),
        };
        match LogSink.send(&request) {
            Ok(_) => {
                status.set(Some((true, "Thanks! Your inquiry is on its way.".to_string())));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(err) => {
                status.set(Some((false, format!("Could not send: {err}"))));
            }
        }
    };

    rsx! {
        section { id: "contact", class: "section section--band",
            div { class: "section-inner section-inner--narrow contact-grid",
                div {
                    h2 { class: "section-title", "Get in touch" }
                    p { class: "section-sub",
                        "Tell me about your shoot and what you have in mind. I usually reply within one business day."
                    }

                    div { class: "contact-rows",
                        div { class: "contact-row",
                            {icons::mail(16)}
                            a { href: "mailto:hello@stillframe.example", "hello@stillframe.example" }
                        }
                        div { class: "contact-row",
                            {icons::phone(16)}
                            span { "(757) 555-0123" }
                        }
                        div { class: "contact-row",
                            {icons::map_pin(16)}
                            span { "Charlottesville, VA" }
                        }
                        div { class: "contact-row",
                            {icons::instagram(16)}
                            a { href: "#", "@stillframe" }
                        }
                        div { class: "contact-row",
                            {icons::github(16)}
                            a { href: "#", "github.com/stillframe" }
                        }
                    }
                }

                div { class: "portal-card",
                    div { class: "contact-form",
                        div {
                            label { class: "field-label", r#for: "contact-name", "Name" }
                            input {
                                id: "contact-name",
                                class: "text-input",
                                r#type: "text",
                                placeholder: "Jane Doe",
                                value: "{name()}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        div {
                            label { class: "field-label", r#for: "contact-email", "Email" }
                            input {
                                id: "contact-email",
                                class: "text-input",
                                r#type: "email",
                                placeholder: "jane@example.com",
                                value: "{email()}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div {
                            label { class: "field-label", r#for: "contact-message", "Message" }
                            textarea {
                                id: "contact-message",
                                class: "text-input",
                                placeholder: "Tell me about your project...",
                                value: "{message()}",
                                oninput: move |e| message.set(e.value()),
                            }
                        }

                        Button { onclick: send, "Send inquiry" }

                        if let Some((ok, text)) = status() {
                            p {
                                class: if ok { "form-status form-status--ok" } else { "form-status form-status--err" },
                                "{text}"
                            }
                        }

                        p { class: "hint-text",
                            "The form is demo-only. Wire it to a mail or forms endpoint for production."
                        }
                    }
                }
            }
        }
    }
}
