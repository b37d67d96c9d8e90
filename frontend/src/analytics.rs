use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Installed by the gtag.js snippet in index.html; absent when blocked.
    #[wasm_bindgen(catch, js_name = gtag)]
    fn gtag(command: &str, name: &str, params: &JsValue) -> Result<(), JsValue>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageView { path: String, title: String },
    LaunchDateView,
    WaitlistSignup { email_domain: Option<String>, source: String },
    FaqInteraction { question: String },
    SocialClick { platform: String },
}

impl AnalyticsEvent {
    /// Only the domain of the address leaves the page.
    pub fn signup(email: &str, source: &str) -> Self {
        let email_domain = email
            .trim()
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_lowercase())
            .filter(|domain| !domain.is_empty());
        AnalyticsEvent::WaitlistSignup {
            email_domain,
            source: source.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::LaunchDateView => "launch_date_view",
            AnalyticsEvent::WaitlistSignup { .. } => "waitlist_signup",
            AnalyticsEvent::FaqInteraction { .. } => "faq_interaction",
            AnalyticsEvent::SocialClick { .. } => "social_click",
        }
    }

    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::PageView { path, title } => json!({
                "page_path": path,
                "page_title": title,
            }),
            AnalyticsEvent::LaunchDateView => json!({
                "event_category": "engagement",
                "event_label": "august_2025_launch",
            }),
            AnalyticsEvent::WaitlistSignup { email_domain, source } => json!({
                "event_category": "conversion",
                "event_label": source,
                "email_domain": email_domain,
            }),
            AnalyticsEvent::FaqInteraction { question } => json!({
                "event_category": "engagement",
                "event_label": question,
            }),
            AnalyticsEvent::SocialClick { platform } => json!({
                "event_category": "social",
                "event_label": platform,
            }),
        }
    }
}

/// Fire-and-forget event recording. Implementations must not panic.
pub trait AnalyticsSink {
    fn track(&self, event: AnalyticsEvent);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GtagAnalytics;

impl AnalyticsSink for GtagAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let params = match event.params().serialize(&serializer) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("Dropping {} event: {}", event.name(), e);
                return;
            }
        };
        if let Err(e) = gtag("event", event.name(), &params) {
            gloo_console::debug!("gtag unavailable", e);
        }
    }
}
