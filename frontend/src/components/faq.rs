use web_sys::MouseEvent;
use yew::prelude::*;

pub const FAQS: &[(&str, &str)] = &[
    (
        "What is 21Goals?",
        "21Goals is a strategic fantasy game, where football meets blackjack. Pick 4 Premier League players and try to hit 21 goals – but don't go bust!",
    ),
    (
        "How do I win?",
        "Win by getting closest to 21 without going bust. You bust by scoring over 21 or if any of your players don't score (steer clear of goalkeepers!).",
    ),
    (
        "What gets me busted?",
        "You're busted (eliminated) if: (1) Your total goals exceed 21, or (2) Any of your 4 players finishes the season with 0 goals. Busted players are moved to the bottom of all leaderboards.",
    ),
    (
        "When can I select my players?",
        "Player selection will open when 21Goals launches in August 2025. You'll choose your 4 players at the start of the season and they'll remain your squad throughout - no transfers or changes allowed.",
    ),
    (
        "Is there a cost to play?",
        "21Goals will be free to play. Join the waitlist to be notified when the game is live!",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    on_toggle: Callback<AttrValue>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        let question = props.question.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(question.clone());
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub on_question: Callback<AttrValue>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <div class="faq-section">
            <h2 id="faq">{"Frequently asked questions"}</h2>
            <p class="faq-intro">
                {"Everything you need to know about 21Goals. Find answers to the most common questions below."}
            </p>
            <div class="faq-list">
                { for FAQS.iter().map(|(question, answer)| html! {
                    <FaqItem
                        key={*question}
                        question={*question}
                        answer={*answer}
                        on_toggle={props.on_question.clone()}
                    />
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 42rem;
                    margin: 5rem auto 0;
                }
                .faq-section h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-align: center;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .faq-intro {
                    color: #4b5563;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    background: #e5e7eb;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    font-size: 1rem;
                    font-weight: 500;
                    color: #111827;
                    text-align: left;
                    transition: background 0.2s;
                }
                .faq-question:hover {
                    background: #d1d5db;
                }
                .toggle-icon {
                    color: #e0b400;
                    transition: transform 0.2s;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    padding: 1rem;
                    background: rgba(243, 244, 246, 0.8);
                    border-radius: 0 0 8px 8px;
                    color: #374151;
                }
                .faq-answer p {
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_unique() {
        let mut questions: Vec<_> = FAQS.iter().map(|(q, _)| *q).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), FAQS.len());
    }
}
