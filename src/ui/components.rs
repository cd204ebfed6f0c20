/// Reusable UI components for the side panel

use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::view::{MessageKind, ThreadCard};

/// Locale date (no time) for a Unix timestamp in seconds
pub fn format_created_date(created_utc: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(created_utc * 1000.0));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

#[function_component(LoadingState)]
pub fn loading_state() -> Html {
    html! {
        <div class="loading-container">
            <Spinner />
            <p class="loading-message">{"Loading..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageCardProps {
    pub kind: MessageKind,
    pub text: String,
}

#[function_component(MessageCard)]
pub fn message_card(props: &MessageCardProps) -> Html {
    let alert_type = match props.kind {
        MessageKind::Neutral => AlertType::Info,
        MessageKind::Error => AlertType::Danger,
    };

    html! {
        <div class={classes!("message-card", props.kind.css_class())}>
            <Alert r#type={alert_type} title={props.text.clone()} inline={true}>
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub checked: String,
    pub submit_url: String,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="message-card neutral">
            <div class="empty-title">{"No discussions found."}</div>
            <div class="empty-checked">
                {"Checked:"}
                <br />
                <code class="checked-url">{&props.checked}</code>
            </div>
            <a href={props.submit_url.clone()} target="_blank" class="action-btn">
                {"Submit to Reddit"}
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThreadCardProps {
    pub card: ThreadCard,
}

#[function_component(ThreadCardView)]
pub fn thread_card_view(props: &ThreadCardProps) -> Html {
    let card = &props.card;

    let onclick = {
        let link = card.link.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&link))
    };

    // Broken thumbnails disappear rather than showing a placeholder
    let on_thumb_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            let _ = img.style().set_property("display", "none");
        }
    });

    html! {
        <div class="thread-card" {onclick}>
            <div class="thread-header">
                <span class="subreddit">{&card.community}</span>
                <span class="date">{format_created_date(card.created_utc)}</span>
            </div>
            <div class="thread-body">
                if let Some(thumb) = &card.thumbnail {
                    <img src={thumb.clone()} class="thread-thumb" alt="" onerror={on_thumb_error} />
                }
                <h3 class="thread-title">{&card.title}</h3>
            </div>
            <div class="thread-footer">
                <span class="stat">{format!("⬆ {}", card.score)}</span>
                <span class="stat">{format!("💬 {}", card.comments)}</span>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_created_date() {
        let formatted = format_created_date(1698508200.0);

        assert!(formatted.contains("2023"));
        assert!(!formatted.contains(':'));
    }
}
