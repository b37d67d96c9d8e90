use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::services::Services;
use crate::waitlist::{Field, FormAction, SignupFlow, SubmissionStatus, WaitlistFormModel};

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    /// Receives the refreshed count after a successful signup.
    pub on_count: Callback<u64>,
}

#[function_component(WaitlistForm)]
pub fn waitlist_form(props: &WaitlistFormProps) -> Html {
    let services = use_context::<Services>().unwrap_or_default();
    let model = use_reducer(WaitlistFormModel::default);

    let oninput = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = Field::from_name(&input.name()) {
                model.dispatch(FormAction::FieldChanged(field, input.value()));
            }
        })
    };

    let onsubmit = {
        let model = model.clone();
        let on_count = props.on_count.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = match model.submission() {
                Ok(submission) => submission,
                Err(_) => return,
            };
            model.dispatch(FormAction::SubmitStarted);

            let model = model.clone();
            let services = services.clone();
            let on_count = on_count.clone();
            spawn_local(async move {
                let flow = SignupFlow {
                    service: &*services.waitlist,
                    analytics: &*services.analytics,
                    celebration: &*services.celebration,
                };
                let outcome = flow
                    .run(
                        submission,
                        |action| model.dispatch(action),
                        |count| on_count.emit(count),
                    )
                    .await;
                info!("Waitlist submission settled (ok: {})", outcome.is_ok());
            });
        })
    };

    let dismiss_error = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(FormAction::DismissError))
    };

    if model.status == SubmissionStatus::Submitted {
        return html! {
            <div class="waitlist-success">
                <div class="success-title">
                    <span class="success-icon">{"✓"}</span>
                    {"Welcome to the waitlist!"}
                </div>
                <p>
                    {"Thanks for joining! We'll notify you as soon as 21Goals launches. Get ready to experience fantasy football like never before!"}
                </p>
            </div>
        };
    }

    html! {
        <form class="waitlist-form" onsubmit={onsubmit}>
            <div class="input-row">
                <span class="input-icon">{"👤"}</span>
                <input
                    type="text"
                    name={Field::FullName.name()}
                    value={model.form.full_name.clone()}
                    oninput={oninput.clone()}
                    placeholder="Full Name"
                    required=true
                />
            </div>
            <div class="input-row">
                <span class="input-icon">{"✉"}</span>
                <input
                    type="email"
                    name={Field::Email.name()}
                    value={model.form.email.clone()}
                    oninput={oninput}
                    placeholder="Email"
                    required=true
                />
            </div>
            if let Some(message) = model.error_message() {
                <div class="form-error" role="alert">
                    <span>{message}</span>
                    <button type="button" class="dismiss-error" aria-label="Dismiss" onclick={dismiss_error}>{"×"}</button>
                </div>
            }
            <button type="submit" class="notify-button" disabled={!model.can_submit()}>
                if model.is_loading() {
                    <span class="spinner"></span>
                    {"Joining..."}
                } else {
                    <span>{"🔔"}</span>
                    {"Notify Me"}
                }
            </button>
            <style>
                {r#"
                .waitlist-form, .waitlist-success {
                    max-width: 28rem;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .waitlist-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .input-row {
                    position: relative;
                }
                .input-icon {
                    position: absolute;
                    left: 0.75rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: #278E51;
                }
                .input-row input {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem 1rem 0.75rem 2.75rem;
                    font-size: 1rem;
                    color: #111827;
                }
                .input-row input:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #278E51;
                }
                .form-error {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    border-radius: 8px;
                    padding: 0.75rem;
                    color: #b91c1c;
                    font-size: 0.875rem;
                    text-align: left;
                }
                .dismiss-error {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .notify-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #FFD93B;
                    color: #111827;
                    font-weight: 500;
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 1.5rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .notify-button:hover {
                    background: #f5c400;
                }
                .notify-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .spinner {
                    width: 14px;
                    height: 14px;
                    border: 2px solid #4b5563;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .success-title {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #1f7a45;
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .waitlist-success p {
                    color: #374151;
                    margin: 0;
                }
                "#}
            </style>
        </form>
    }
}
