use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::waitlist::counter::format_count;

pub const TWITTER_URL: &str = "https://x.com/xGPhilosophy";

fn scroll_to(selector: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());
    if let Some(element) = target {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn scroll_link(selector: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(selector);
    })
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub waitlist_count: u64,
    pub on_social_click: Callback<&'static str>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_twitter = {
        let on_social_click = props.on_social_click.clone();
        Callback::from(move |_: MouseEvent| on_social_click.emit("twitter"))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div>
                        <img src="/assets/21goals-icon-white.png" alt="21Goals Logo" class="footer-logo" />
                        <p>
                            {"21Goals is the fantasy football game where strategy beats luck. Pick 4 Premier League players, aim for exactly 21 goals, but avoid going bust!"}
                        </p>
                        <div class="footer-divider"></div>
                        <div class="follow-us">
                            <span>{"Follow Us:"}</span>
                            <a
                                href={TWITTER_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Follow us on Twitter"
                                class="social-link"
                                onclick={on_twitter}
                            >
                                {"𝕏"}
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="quick-links">
                            <li><button onclick={scroll_link("form")}>{"Get Early Access"}</button></li>
                            <li><button onclick={scroll_link("#how-to-play")}>{"How to Play"}</button></li>
                            <li><button onclick={scroll_link("#faq")}>{"FAQ"}</button></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Coming Soon"}</h4>
                        <div class="launch-info">
                            <div>{"📅 Launch: August 2025"}</div>
                            <div>{format!("👥 Waitlist: {}+ members", format_count(props.waitlist_count))}</div>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="legal-links">
                        <a href="/privacy-policy">{"Privacy Policy"}</a>
                        <a href="/terms-of-use">{"Terms of Use"}</a>
                    </div>
                    <p>{"© 2025 21Goals. All rights reserved."}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    border-top: 1px solid #374151;
                    background: #052e16;
                    color: #fff;
                }
                @media (min-width: 1024px) {
                    .site-footer {
                        background: linear-gradient(rgba(5, 46, 22, 0.8), rgba(5, 46, 22, 0.8)),
                            url('/bg/footer_bg.webp') center / cover;
                    }
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 3rem;
                    margin-bottom: 2rem;
                }
                .footer-logo {
                    width: 12rem;
                    height: auto;
                    margin-bottom: 1rem;
                }
                .footer-divider {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    margin: 1.5rem 0;
                }
                .follow-us {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .social-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .social-link:hover {
                    background: rgba(255, 217, 59, 0.2);
                }
                .site-footer h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 1rem;
                }
                .quick-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .quick-links button {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #fff;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .quick-links button:hover, .legal-links a:hover {
                    color: #FFD93B;
                }
                .launch-info {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 1.5rem;
                    font-size: 0.875rem;
                }
                .legal-links {
                    display: flex;
                    gap: 1rem;
                }
                .legal-links a {
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </footer>
    }
}
