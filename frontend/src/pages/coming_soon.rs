use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::analytics::AnalyticsEvent;
use crate::components::{
    countdown_timer::CountdownTimer,
    faq::Faq,
    footer::Footer,
    loading_screen::LoadingScreen,
    waitlist_counter::WaitlistCounter,
    waitlist_form::WaitlistForm,
};
use crate::config;
use crate::services::Services;
use crate::waitlist::counter;

pub const PAGE_PATH: &str = "/coming-soon";
pub const PAGE_TITLE: &str = "21Goals - Coming Soon";

struct Step {
    number: u8,
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    badge: &'static str,
    tone: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: 1,
        icon: "👤",
        title: "Pick 4 Players",
        body: "Pick 4 Premier League players from any teams. Your goal? Hit 21 goals – but every player must score at least once.",
        badge: "⚠ Avoid goalkeepers",
        tone: "primary",
    },
    Step {
        number: 2,
        icon: "🎯",
        title: "Season Starts",
        body: "Once the season kicks off, your picks are locked. Track live goals and see how close you're getting to 21.",
        badge: "🔒 No transfers allowed",
        tone: "primary",
    },
    Step {
        number: 3,
        icon: "✖",
        title: "Avoid Busting",
        body: "Stay in the game by avoiding two things: (1) Going over 21 total goals, and (2) Picking a player who fails to score all season.",
        badge: "💀 Busted = Game Over",
        tone: "danger",
    },
    Step {
        number: 4,
        icon: "🏆",
        title: "Win the Game",
        body: "Create a Mini League and challenge your friends. The winner? Whoever gets closest to 21 without busting. The forfeits? You decide.",
        badge: "🏆 Closest to 21 wins",
        tone: "gold",
    },
];

const EXAMPLE_SQUAD: [(u32, &str); 4] = [(9, "Striker"), (4, "Winger"), (5, "Midfielder"), (3, "Defender")];

#[function_component(ComingSoon)]
pub fn coming_soon() -> Html {
    let services = use_context::<Services>().unwrap_or_default();
    let waitlist_count = use_state(|| config::DEFAULT_WAITLIST_COUNT);
    let is_page_loading = use_state(|| true);

    {
        let analytics = services.analytics.clone();
        use_mount(move || {
            analytics.track(AnalyticsEvent::PageView {
                path: PAGE_PATH.to_string(),
                title: PAGE_TITLE.to_string(),
            });
            analytics.track(AnalyticsEvent::LaunchDateView);
        });
    }

    // The overlay stays up until the initial count fetch settles.
    {
        let waitlist = services.waitlist.clone();
        let waitlist_count = waitlist_count.clone();
        let is_page_loading = is_page_loading.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }

                spawn_local(async move {
                    if let Some(count) = counter::load_initial(&*waitlist).await {
                        waitlist_count.set(count);
                    }
                    is_page_loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_count = {
        let waitlist_count = waitlist_count.clone();
        Callback::from(move |count: u64| {
            info!("Waitlist count refreshed: {}", count);
            waitlist_count.set(count);
        })
    };

    let on_question = {
        let analytics = services.analytics.clone();
        Callback::from(move |question: AttrValue| {
            analytics.track(AnalyticsEvent::FaqInteraction { question: question.to_string() });
        })
    };

    let on_social_click = {
        let analytics = services.analytics.clone();
        Callback::from(move |platform: &'static str| {
            analytics.track(AnalyticsEvent::SocialClick { platform: platform.to_string() });
        })
    };

    html! {
        <LoadingScreen is_loading={*is_page_loading}>
            <div class="coming-soon-page">
                <section class="hero-section">
                    <picture class="hero-background">
                        <source media="(min-width: 1024px)" srcset="/bg/early_access_bg3.webp" />
                        <img src="/bg/early_access_mobile_bg.webp" alt="Early Access Background" loading="eager" />
                    </picture>
                    <div class="hero-overlay"></div>

                    <div class="hero-content">
                        <div class="hero-brand">
                            <img src="/assets/21goals-icon-white.png" alt="21Goals Logo" class="hero-logo" draggable="false" />
                            <div class="launch-tag">{"📅 LAUNCHING AUGUST 2025"}</div>
                        </div>

                        <div class="hero-heading">
                            <h1>{"Get early access"}</h1>
                            <p>
                                {"The free-to-play fantasy game where football meets blackjack. Pick 4 players, hit 21 goals – but avoid going bust. Sign up to be notified when we launch!"}
                            </p>
                        </div>

                        <WaitlistForm on_count={on_count} />
                        <WaitlistCounter count={*waitlist_count} />
                        <CountdownTimer target={config::launch_instant()} />
                    </div>
                </section>

                <section class="how-section">
                    <div class="how-content">
                        <h2 id="how-to-play">{"How to Play 21Goals"}</h2>
                        <p class="how-intro">
                            {"The fantasy football game where you don't want to score too many. Here's how to play the ultimate game of Football Blackjack."}
                        </p>

                        <div class="steps-grid">
                            { for STEPS.iter().map(|step| html! {
                                <div class="step" key={step.title}>
                                    <div class="step-icon-wrap">
                                        <div class={classes!("step-icon", step.tone)}>{step.icon}</div>
                                        <div class="step-number">{step.number}</div>
                                    </div>
                                    <h4>{step.title}</h4>
                                    <p>{step.body}</p>
                                    <div class={classes!("step-badge", step.tone)}>{step.badge}</div>
                                </div>
                            }) }
                        </div>

                        <div class="example-squad">
                            <h3>{"Example Winning Strategy"}</h3>
                            <p>{"Perfect squad with 21 total goals – blackjack!"}</p>
                            <div class="squad-grid">
                                { for EXAMPLE_SQUAD.iter().map(|(goals, position)| html! {
                                    <div class="squad-card" key={*position}>
                                        <div class="squad-goals">{goals}</div>
                                        <div class="squad-unit">{"Goals"}</div>
                                        <div class="squad-position">{position}</div>
                                    </div>
                                }) }
                            </div>
                            <div class="squad-total">
                                {format!("🏆 Total: {} Goals - Winner! ✨", EXAMPLE_SQUAD.iter().map(|(goals, _)| goals).sum::<u32>())}
                            </div>
                        </div>

                        <Faq on_question={on_question} />
                    </div>
                </section>

                <Footer waitlist_count={*waitlist_count} on_social_click={on_social_click} />
            </div>
            <style>
                {r#"
                .coming-soon-page {
                    min-height: 100vh;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                }
                .hero-background img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: 0;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.1);
                    z-index: 1;
                }
                .hero-content {
                    position: relative;
                    z-index: 2;
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 3.5rem 1rem;
                    text-align: center;
                }
                .hero-logo {
                    width: 12rem;
                    height: 4rem;
                    object-fit: contain;
                    margin-bottom: 0.5rem;
                }
                .launch-tag {
                    color: #fde68a;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    margin-bottom: 2rem;
                }
                .hero-heading {
                    margin-bottom: 3rem;
                }
                .hero-heading h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 1rem;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                }
                .hero-heading p {
                    color: #f3f4f6;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    max-width: 28rem;
                    margin: 0 auto;
                    text-shadow: 0 2px 6px rgba(0, 0, 0, 0.4);
                }
                .how-section {
                    position: relative;
                    background: linear-gradient(rgba(255, 255, 255, 0.7), rgba(255, 255, 255, 0.7)),
                        url('/bg/light_theme_bg.webp') center / cover;
                }
                .how-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .how-content h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-align: center;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .how-intro {
                    color: #4b5563;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr));
                    gap: 2rem;
                }
                .step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .step-icon-wrap {
                    position: relative;
                    margin-bottom: 1.5rem;
                }
                .step-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    border: 4px solid #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    color: #fff;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15);
                }
                .step-icon.primary { background: #278E51; }
                .step-icon.danger { background: #dc2626; }
                .step-icon.gold { background: #FFD93B; }
                .step-number {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid #fff;
                    background: #FFD93B;
                    color: #111827;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 0 0 0.75rem;
                }
                .step p {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }
                .step-badge {
                    font-size: 0.75rem;
                    font-weight: 500;
                    border-radius: 9999px;
                    padding: 0.5rem 0.75rem;
                }
                .step-badge.primary { color: #1f7a45; background: #ecfdf3; }
                .step-badge.danger { color: #b91c1c; background: #fef2f2; }
                .step-badge.gold { color: #a16207; background: #fefce8; }
                .example-squad {
                    margin-top: 4rem;
                    border-radius: 16px;
                    padding: 2rem;
                    background: rgba(22, 101, 52, 0.9);
                    text-align: center;
                }
                .example-squad h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                .example-squad > p {
                    color: #e5e7eb;
                    margin: 0 0 2rem;
                }
                .squad-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .squad-card {
                    background: rgba(255, 255, 255, 0.95);
                    border-radius: 12px;
                    padding: 1.25rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                }
                .squad-goals {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1f7a45;
                }
                .squad-unit {
                    font-size: 0.75rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .squad-position {
                    font-size: 0.875rem;
                    color: #374151;
                    font-weight: 500;
                    margin-top: 0.5rem;
                }
                .squad-total {
                    display: inline-block;
                    margin-top: 2rem;
                    background: #FFD93B;
                    color: #111827;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                }
                @media (max-width: 640px) {
                    .hero-heading h1 { font-size: 2rem; }
                    .hero-heading p { font-size: 0.9rem; }
                    .how-content { padding: 3rem 1rem; }
                }
                "#}
            </style>
        </LoadingScreen>
    }
}
