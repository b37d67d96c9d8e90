use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub const SECOND_BURST_DELAY_MILLIS: u32 = 200;

#[wasm_bindgen]
extern "C" {
    // Global class from the js-confetti script tag.
    #[wasm_bindgen(js_name = JSConfetti)]
    type JsConfetti;

    #[wasm_bindgen(catch, constructor, js_class = "JSConfetti")]
    fn new() -> Result<JsConfetti, JsValue>;

    #[wasm_bindgen(catch, method, js_class = "JSConfetti", js_name = addConfetti)]
    fn add_confetti(this: &JsConfetti, config: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub confetti_colors: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emojis: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_size: Option<u32>,
    pub confetti_number: u32,
}

impl ConfettiBurst {
    /// Brand greens and golds.
    pub fn colors() -> Self {
        Self {
            confetti_colors: vec!["#278E51", "#FFD93B", "#FFFFFF", "#4ade80", "#fcd34d"],
            confetti_number: 100,
            ..Default::default()
        }
    }

    pub fn emojis() -> Self {
        Self {
            emojis: vec!["⚽", "🏆", "🎉", "✨"],
            emoji_size: Some(80),
            confetti_number: 30,
            ..Default::default()
        }
    }
}

/// Cosmetic success effect. May silently do nothing.
pub trait Celebration {
    fn celebrate(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Confetti;

fn fire(confetti: &JsConfetti, burst: &ConfettiBurst) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match burst.serialize(&serializer) {
        Ok(config) => {
            if let Err(e) = confetti.add_confetti(&config) {
                gloo_console::warn!("confetti burst failed", e);
            }
        }
        Err(e) => log::warn!("Could not build confetti config: {}", e),
    }
}

impl Celebration for Confetti {
    fn celebrate(&self) {
        let confetti = match JsConfetti::new() {
            Ok(confetti) => confetti,
            Err(e) => {
                gloo_console::warn!("js-confetti not loaded", e);
                return;
            }
        };

        fire(&confetti, &ConfettiBurst::colors());
        Timeout::new(SECOND_BURST_DELAY_MILLIS, move || {
            fire(&confetti, &ConfettiBurst::emojis());
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_burst_serializes_like_js_confetti_expects() {
        let value = serde_json::to_value(ConfettiBurst::colors()).unwrap();
        assert_eq!(value["confettiNumber"], 100);
        assert_eq!(value["confettiColors"].as_array().map(|c| c.len()), Some(5));
        assert!(value.get("emojis").is_none());
        assert!(value.get("emojiSize").is_none());
    }

    #[test]
    fn emoji_burst_is_distinct() {
        let value = serde_json::to_value(ConfettiBurst::emojis()).unwrap();
        assert_eq!(value["confettiNumber"], 30);
        assert_eq!(value["emojiSize"], 80);
        assert_eq!(value["emojis"][0], "⚽");
        assert!(value.get("confettiColors").is_none());
    }
}
