//! お問い合わせフォームコンポーネント
//!
//! 送信中はボタンを無効化、結果は右上に5秒間通知。

use crate::api::contact::send_contact;
use chrono::{DateTime, Utc};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use roma_tours_common::{ContactForm, Notification, NOTIFICATION_DISMISS_MS, SENDING_LABEL};

const SUBMIT_LABEL: &str = "Send Message";

fn submitted_at() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let sending = RwSignal::new(false);
    let field_error = RwSignal::new(None::<String>);
    let notification = RwSignal::new(None::<Notification>);
    // 古い消去タイマーが新しい通知を消さないように
    let notification_seq = StoredValue::new(0u32);

    let notify = move |n: Notification| {
        notification_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let seq = notification_seq.get_value();
        notification.set(Some(n));

        Timeout::new(NOTIFICATION_DISMISS_MS as u32, move || {
            if notification_seq.get_value() == seq {
                notification.set(None);
            }
        })
        .forget();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let submission = match form.get_untracked().into_submission(submitted_at()) {
            Ok(submission) => submission,
            Err(e) => {
                field_error.set(Some(e.to_string()));
                return;
            }
        };
        field_error.set(None);
        sending.set(true);

        spawn_local(async move {
            match send_contact(&submission).await {
                Ok(()) => {
                    gloo::console::log!("Form submitted successfully");
                    notify(Notification::sent());
                    form.set(ContactForm::default());
                }
                Err(e) => {
                    gloo::console::error!("Submission error:", e);
                    notify(Notification::failed());
                }
            }
            sending.set(false);
        });
    };

    view! {
        <section id="contact" class="contact-section">
            <h2>"Contact Us"</h2>
            <form id="contact-form" class="contact-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="firstName">"First Name"</label>
                        <input
                            type="text"
                            id="firstName"
                            name="firstName"
                            required
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="lastName">"Last Name"</label>
                        <input
                            type="text"
                            id="lastName"
                            name="lastName"
                            required
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        required
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        name="newsletter"
                        prop:checked=move || form.with(|f| f.newsletter)
                        on:change=move |ev| form.update(|f| f.newsletter = event_target_checked(&ev))
                    />
                    "Subscribe to our newsletter"
                </label>

                {move || field_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { SENDING_LABEL } else { SUBMIT_LABEL }}
                </button>
            </form>
        </section>

        {move || {
            notification
                .get()
                .map(|n| {
                    view! {
                        <div
                            id="notification"
                            class=format!(
                                "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50 {}",
                                n.css_class(),
                            )
                        >
                            {n.message}
                        </div>
                    }
                })
        }}
    }
}
