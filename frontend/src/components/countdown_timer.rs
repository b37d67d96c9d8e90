use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::countdown::CountdownState;

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub target: DateTime<Utc>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let state = use_state(|| CountdownState::at(props.target, Utc::now()));

    // Ticks until launch. Once launched the deps change and the cleanup
    // drops the interval.
    {
        let state = state.clone();
        let launched = state.is_launched();
        use_effect_with_deps(
            move |(target, launched)| {
                let interval = (!*launched).then(|| {
                    let target = *target;
                    Interval::new(config::TICK_MILLIS, move || {
                        state.set(CountdownState::at(target, Utc::now()));
                    })
                });
                move || drop(interval)
            },
            (props.target, launched),
        );
    }

    let value = state.value();

    html! {
        <div class="countdown">
            <div class="countdown-grid" role="timer" aria-label={format!("{} seconds until launch", value.total_seconds())}>
                { value.cells().iter().map(|(label, value)| html! {
                    <div class="countdown-cell" key={*label}>
                        <div class="countdown-value">{value}</div>
                        <div class="countdown-label">{label}</div>
                    </div>
                }).collect::<Html>() }
            </div>
            <div class="countdown-caption">
                <span class="countdown-pill">
                    if state.is_launched() {
                        {"We're live!"}
                    } else {
                        <span class="caption-long">{"Left Until Full Release"}</span>
                        <span class="caption-short">{"Until Launch"}</span>
                    }
                </span>
            </div>
            <style>
                {r#"
                .countdown {
                    margin-top: 3.5rem;
                }
                .countdown-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.75rem;
                    max-width: 28rem;
                    margin: 0 auto 1rem;
                }
                .countdown-cell {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    background: rgba(255, 255, 255, 0.95);
                    border-radius: 12px;
                    padding: 0.75rem 0.25rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    transition: transform 0.2s;
                }
                .countdown-cell:hover {
                    transform: scale(1.05);
                }
                .countdown-value {
                    font-size: 2rem;
                    font-weight: 800;
                    color: #1f7a45;
                    line-height: 1;
                    margin-bottom: 0.25rem;
                }
                .countdown-label {
                    font-size: 0.75rem;
                    color: #4b5563;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-weight: 600;
                }
                .countdown-caption {
                    display: flex;
                    justify-content: center;
                }
                .countdown-pill {
                    background: rgba(255, 255, 255, 0.95);
                    color: #166534;
                    font-weight: 600;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    letter-spacing: 0.05em;
                }
                .caption-short {
                    display: none;
                }
                @media (max-width: 400px) {
                    .countdown-value { font-size: 1.25rem; }
                    .countdown-label { font-size: 0.6rem; }
                    .caption-long { display: none; }
                    .caption-short { display: inline; }
                }
                "#}
            </style>
        </div>
    }
}
