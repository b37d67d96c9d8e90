use yew::prelude::*;

use crate::waitlist::counter::format_count;

#[derive(Properties, PartialEq)]
pub struct WaitlistCounterProps {
    pub count: u64,
}

#[function_component(WaitlistCounter)]
pub fn waitlist_counter(props: &WaitlistCounterProps) -> Html {
    html! {
        <div class="waitlist-counter">
            <div class="avatar-stack">
                { for (1..=4).map(|i| html! {
                    <div class="avatar" key={i.to_string()}>{"👤"}</div>
                }) }
            </div>
            <div class="counter-pill">
                <span>{"👥"}</span>
                <span class="counter-text">
                    {format!("Join {}+ others on the waitlist", format_count(props.count))}
                </span>
            </div>
            <style>
                {r#"
                .waitlist-counter {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .avatar-stack {
                    display: flex;
                }
                .avatar {
                    width: 2rem;
                    height: 2rem;
                    margin-left: -0.5rem;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    background: linear-gradient(135deg, #FFD93B, #f5c400);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.8rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
                }
                .avatar:first-child {
                    margin-left: 0;
                }
                .counter-pill {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    color: #fff;
                    font-size: 0.875rem;
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                }
                .counter-text {
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}
