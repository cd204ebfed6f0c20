/// Side panel UI for Truth Layer

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{CONFIG_STORAGE_KEY, PanelConfig};
use crate::error::BridgeError;
use crate::fetcher::RedditClient;
use crate::observer::{SearchController, TabEvent, run_trigger};
use crate::ui::components::{EmptyState, LoadingState, MessageCard, ThreadCardView};
use crate::view::{PanelBody, PanelView};

// Import JS bridge functions
#[wasm_bindgen(module = "/panel.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    fn subscribeTabEvents(callback: &js_sys::Function);

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;
}

#[function_component(Panel)]
pub fn panel() -> Html {
    let view = use_state(PanelView::default);
    let controller = use_mut_ref(SearchController::default);

    // Load config, search once, then follow tab events
    {
        let view = view.clone();
        let controller = controller.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = load_config().await;
                controller.borrow_mut().set_config(config);
                dispatch(TabEvent::PanelOpened, controller.clone(), view.clone());

                // Subscribe only now so no event searches with the default config
                subscribe_tab_events(controller, view);
            });

            || ()
        });
    }

    html! {
        <div class="panel">
            <header class="status-bar">
                <span class="status-text">{&view.status}</span>
            </header>

            <div class="results-container">
                {match &view.body {
                    PanelBody::Loading => html! { <LoadingState /> },
                    PanelBody::Message { kind, text } => html! {
                        <MessageCard kind={*kind} text={text.clone()} />
                    },
                    PanelBody::Empty { checked, submit_url } => html! {
                        <EmptyState checked={checked.clone()} submit_url={submit_url.clone()} />
                    },
                    PanelBody::Threads(cards) => html! {
                        <>
                            {for cards.iter().map(|card| html! {
                                <ThreadCardView key={card.id.clone()} card={card.clone()} />
                            })}
                        </>
                    },
                }}
            </div>
        </div>
    }
}

/// Single entry point for every tab event
fn dispatch(event: TabEvent, controller: Rc<RefCell<SearchController>>, view: UseStateHandle<PanelView>) {
    if !event.qualifies() {
        return;
    }

    spawn_local(async move {
        let tab_url = active_tab_url().await;
        let api = RedditClient::new();
        run_trigger(&controller, &api, tab_url, move |next| view.set(next)).await;
    });
}

fn subscribe_tab_events(controller: Rc<RefCell<SearchController>>, view: UseStateHandle<PanelView>) {
    let on_tab_event = Closure::wrap(Box::new(move |event_js: JsValue| {
        match serde_wasm_bindgen::from_value::<TabEvent>(event_js) {
            Ok(event) => dispatch(event, controller.clone(), view.clone()),
            Err(e) => log::warn!("Ignoring malformed tab event: {:?}", e),
        }
    }) as Box<dyn Fn(JsValue)>);

    subscribeTabEvents(on_tab_event.as_ref().unchecked_ref());
    // Listeners live as long as the panel document
    on_tab_event.forget();
}

// Helper functions

async fn active_tab_url() -> Result<Option<String>, BridgeError> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| BridgeError::new("getActiveTabUrl", format!("{:?}", e)))?;
    Ok(url_js.as_string())
}

async fn load_config() -> PanelConfig {
    let stored = match getStorage(CONFIG_STORAGE_KEY).await {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("{}", BridgeError::new("getStorage", format!("{:?}", e)));
            return PanelConfig::default();
        }
    };

    if stored.is_null() || stored.is_undefined() {
        return PanelConfig::default();
    }

    match serde_wasm_bindgen::from_value::<PanelConfig>(stored) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            log::warn!("Ignoring stored config: {:?}", e);
            PanelConfig::default()
        }
    }
}
