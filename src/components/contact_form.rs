//! Contact Form Component
//!
//! The validated form: four fields with inline errors, an aggregate
//! banner and a submit button that swaps its label for a loader while
//! the transport is in flight. All state lives in the store; the
//! markup here only renders it and feeds events back.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_site_context;
use crate::store::{BannerKind, SiteStateStoreFields, SiteStore};
use crate::transport;
use crate::validate::Field;

/// Success banners dismiss themselves after this long.
const SUCCESS_DISMISS_MS: u32 = 6_000;

const AGGREGATE_INVALID: &str = "Please fix the errors above.";

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_site_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // disabled button is the visible guard; this is the logical one
        if store.form().with_untracked(|form| form.sending()) {
            return;
        }

        let mut all_valid = false;
        store.form().update(|form| all_valid = form.evaluate_all());
        if !all_valid {
            store.form().update(|form| {
                form.show_banner(BannerKind::Error, AGGREGATE_INVALID.to_string());
            });
            return;
        }

        let payload = store.form().with_untracked(|form| form.payload());
        store.form().update(|form| form.begin_submit());
        let config = ctx.config();

        spawn_local(async move {
            match transport::submit(config, &payload).await {
                Ok(message) => {
                    let mut seq = 0;
                    store.form().update(|form| seq = form.apply_success(message));
                    TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
                    store.form().update(|form| form.dismiss_banner(seq));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] submit failed: {err}").into());
                    store.form().update(|form| {
                        form.apply_failure(err.to_string());
                    });
                }
            }
        });
    };

    let sending = move || store.form().with(|form| form.sending());

    view! {
        <form id="contact-form" class="contact-form" novalidate on:submit=on_submit>
            <FormField field=Field::Name label="Name" input_type="text" />
            <FormField field=Field::Email label="Email" input_type="email" />
            <FormField field=Field::Subject label="Subject" input_type="text" />
            <FormField field=Field::Message label="Message" input_type="text" multiline=true />

            <button type="submit" class="btn btn-primary btn-submit" disabled=sending>
                <span class="btn-text" class:hidden=sending>"Send Message"</span>
                <span class="btn-loader" class:hidden=move || !sending()>
                    <i class="fas fa-spinner fa-spin"></i>
                    " Sending..."
                </span>
            </button>

            {move || {
                store
                    .form()
                    .with(|form| form.banner.clone())
                    .map(|banner| {
                        let seq = banner.seq;
                        let class = match banner.kind {
                            BannerKind::Success => "form-message success",
                            BannerKind::Error => "form-message error",
                        };
                        view! {
                            <div id="form-message" class=class role="status">
                                <span>{banner.text}</span>
                                <button
                                    type="button"
                                    class="message-dismiss"
                                    aria-label="Dismiss message"
                                    on:click=move |_| {
                                        store.form().update(|form| form.dismiss_banner(seq))
                                    }
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        }
                    })
            }}
        </form>
    }
}

/// One labelled field with its inline error. Blur re-evaluates, focus
/// hides the message until the next evaluation.
#[component]
fn FormField(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let store: SiteStore = use_site_context().store;

    let group_class = move || store.form().with(|form| form.field(field).css_class());
    let value = move || store.form().with(|form| form.field(field).value.clone());
    let error_text = move || store.form().with(|form| form.field(field).error.unwrap_or(""));

    let on_input = move |ev: web_sys::Event| {
        store.form().update(|form| form.field_mut(field).value = event_target_value(&ev));
    };
    let on_blur = move |_| {
        store.form().update(|form| {
            form.field_mut(field).evaluate(field);
        });
    };
    let on_focus = move |_| {
        store.form().update(|form| form.field_mut(field).clear_error());
    };

    view! {
        <div class=group_class>
            <label for=field.key()>{label}</label>
            {if multiline {
                view! {
                    <textarea
                        id=field.key()
                        name=field.key()
                        rows="6"
                        prop:value=value
                        on:input=on_input
                        on:blur=on_blur
                        on:focus=on_focus
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=input_type
                        id=field.key()
                        name=field.key()
                        prop:value=value
                        on:input=on_input
                        on:blur=on_blur
                        on:focus=on_focus
                    />
                }
                    .into_any()
            }}
            <span class="error-message" id=format!("{}-error", field.key())>
                {error_text}
            </span>
        </div>
    }
}
