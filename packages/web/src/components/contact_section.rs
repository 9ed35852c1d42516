//! Contact section: intro copy and the message form

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::use_toasts;
use crate::config::ContactConfig;
use crate::contact::{ContactForm, ContactSubmitter, Field, MessageCatalog, MessageKey};
use crate::state::{SignalStore, ToastNotifier};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-[#f2f4f7] rounded-lg border border-transparent focus:bg-white focus:border-black transition-colors outline-none";
const BUTTON_CLASS: &str = "cursor-pointer w-full bg-[#ffdd2d] text-black py-3 px-6 rounded-lg font-normal hover:bg-[#f2d22b] transition-colors focus:outline-none focus:ring-2 focus:ring-slate-900 focus:ring-offset-2";

/// Contact section - sends visitor messages to the form backend
#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<ContactConfig>();
    let toasts = use_toasts();
    let catalog = MessageCatalog::new(config.locale);

    let form = use_signal(ContactForm::default);
    let submitting = use_signal(|| false);
    let store = SignalStore::new(form, submitting);

    let submitter = use_hook(|| {
        Rc::new(ContactSubmitter::new(
            config.client(),
            ToastNotifier::new(toasts),
            catalog,
        ))
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Cheap early exit; the submitter re-checks before sending
        if submitting() {
            return;
        }

        let submitter = submitter.clone();
        spawn(async move {
            submitter.submit(&store).await;
        });
    };

    let submit_label = if submitting() {
        catalog.get(MessageKey::SendingLabel)
    } else {
        catalog.get(MessageKey::SubmitLabel)
    };
    let button_class = if submitting() {
        format!("{BUTTON_CLASS} opacity-60 pointer-events-none")
    } else {
        BUTTON_CLASS.to_string()
    };

    rsx! {
        section {
            id: "contact",
            class: "min-h-screen flex items-center py-16 md:py-24",

            div {
                class: "mx-auto max-w-6xl px-6",
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16",

                    // Intro
                    div {
                        p {
                            class: "text-xs uppercase tracking-widest text-slate-500 mb-3",
                            {catalog.get(MessageKey::Eyebrow)}
                        }
                        h2 {
                            class: "text-3xl md:text-4xl font-semibold text-slate-900 mb-6",
                            {catalog.get(MessageKey::Heading)}
                        }
                        p {
                            class: "text-slate-700 leading-relaxed mb-8",
                            {catalog.get(MessageKey::Intro)}
                        }
                    }

                    // Form
                    div {
                        form {
                            class: "space-y-6",
                            onsubmit: handle_submit,

                            ContactField {
                                field: Field::Name,
                                label: catalog.get(MessageKey::NameLabel),
                                placeholder: catalog.get(MessageKey::NamePlaceholder),
                                value: form.read().name.clone(),
                                oninput: move |value| store.set_field(Field::Name, value),
                            }
                            ContactField {
                                field: Field::Email,
                                label: catalog.get(MessageKey::EmailLabel),
                                placeholder: catalog.get(MessageKey::EmailPlaceholder),
                                value: form.read().email.clone(),
                                oninput: move |value| store.set_field(Field::Email, value),
                            }
                            ContactField {
                                field: Field::Message,
                                label: catalog.get(MessageKey::MessageLabel),
                                placeholder: catalog.get(MessageKey::MessagePlaceholder),
                                value: form.read().message.clone(),
                                oninput: move |value| store.set_field(Field::Message, value),
                            }

                            button {
                                r#type: "submit",
                                class: "{button_class}",
                                disabled: submitting(),
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Labeled, required input bound to one field of the form
#[component]
fn ContactField(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    let name = field.name();

    rsx! {
        div {
            label {
                r#for: "{name}",
                class: "block text-sm font-medium text-slate-700 mb-2",
                "{label}"
            }
            if field == Field::Message {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    value: "{value}",
                    oninput: move |e| oninput.call(e.value()),
                    required: true,
                    rows: "6",
                    placeholder: "{placeholder}",
                    class: "{INPUT_CLASS} resize-none"
                }
            } else {
                input {
                    r#type: if field == Field::Email { "email" } else { "text" },
                    id: "{name}",
                    name: "{name}",
                    value: "{value}",
                    oninput: move |e| oninput.call(e.value()),
                    required: true,
                    placeholder: "{placeholder}",
                    class: "{INPUT_CLASS}"
                }
            }
        }
    }
}
