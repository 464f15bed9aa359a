//! The waitlist form widget: a four-state submission around one POST.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lore_waitlist::{SubmitStatus, Submission, WaitlistClient};

/// Email capture form.
///
/// All state is local to this component instance; reloading the page starts
/// over at idle. The browser fetch future is not `Send`, so the call runs on
/// `spawn_local`.
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let submission = RwSignal::new(Submission::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Refused while empty, in flight, or already joined; nothing is sent.
        if !submission.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        let email = submission.with_untracked(|s| s.email.clone());
        spawn_local(async move {
            let outcome = WaitlistClient::new().submit(&email).await;
            submission.update(|s| s.finish(outcome));
        });
    };

    let disabled = move || submission.with(|s| s.controls_disabled());
    let button_label = move || {
        submission.with(|s| match s.status {
            SubmitStatus::Loading => "Joining...",
            SubmitStatus::Success => "Joined",
            _ => "Notify Me",
        })
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit>
            <div class="form-row">
                <input
                    type="email"
                    class="email-input"
                    placeholder="Enter your email"
                    aria-label="Email address"
                    required=true
                    prop:value=move || submission.with(|s| s.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        submission.update(|s| s.set_email(value));
                    }
                    disabled=disabled
                />
                <button type="submit" class="submit-button" disabled=disabled>
                    {button_label}
                </button>
            </div>
            {move || {
                submission.with(|s| {
                    (!s.message.is_empty()).then(|| {
                        let class = if s.status == SubmitStatus::Success {
                            "status-line status-success"
                        } else {
                            "status-line status-error"
                        };
                        view! {
                            <p class=class role="status">{s.message.clone()}</p>
                        }
                    })
                })
            }}
        </form>
    }
}
