/// Tab events and the search trigger they drive
use std::cell::RefCell;

use serde::Deserialize;

use crate::config::PanelConfig;
use crate::error::BridgeError;
use crate::fetcher::{DiscussionApi, search_discussions};
use crate::normalize::SearchKey;
use crate::view::PanelView;

/// Events delivered by the bridge's tab listeners
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TabEvent {
    PanelOpened,
    Activated,
    Updated { complete: bool, active: bool },
}

impl TabEvent {
    /// Whether this event should re-run the search. Updates count only
    /// once the active tab has finished loading.
    pub fn qualifies(&self) -> bool {
        match self {
            TabEvent::PanelOpened | TabEvent::Activated => true,
            TabEvent::Updated { complete, active } => *complete && *active,
        }
    }
}

/// What a trigger decided to do
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Browser-internal page or no URL at all
    Unsupported,
    /// Same key as the last search; nothing to do
    Unchanged,
    Search { key: SearchKey, generation: u64 },
}

/// Owns the last searched key and the search generation counter
#[derive(Debug, Default)]
pub struct SearchController {
    config: PanelConfig,
    current_key: Option<SearchKey>,
    generation: u64,
}

impl SearchController {
    pub fn new(config: PanelConfig) -> Self {
        SearchController {
            config,
            current_key: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PanelConfig) {
        self.config = config;
    }

    pub fn current_key(&self) -> Option<&SearchKey> {
        self.current_key.as_ref()
    }

    /// Decide what to do for the active tab's URL
    pub fn trigger(&mut self, tab_url: Option<&str>) -> Trigger {
        let key = match SearchKey::from_tab_url(tab_url, &self.config) {
            Some(key) => key,
            None => {
                self.supersede();
                return Trigger::Unsupported;
            }
        };

        if self.current_key.as_ref() == Some(&key) {
            return Trigger::Unchanged;
        }

        self.current_key = Some(key.clone());
        self.generation += 1;
        Trigger::Search {
            key,
            generation: self.generation,
        }
    }

    /// Invalidate any search in flight and forget the last key, so its
    /// results are dropped and the next visit to that page searches again.
    pub fn supersede(&mut self) {
        self.current_key = None;
        self.generation += 1;
    }

    /// True while nothing has superseded the search started at `generation`
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Run one trigger cycle: decide, show loading, fetch, show results.
///
/// `render` receives every view the panel should display, in order.
/// Results of a search that has been superseded while its requests were
/// in flight are discarded.
pub async fn run_trigger<A, F>(
    controller: &RefCell<SearchController>,
    api: &A,
    tab_url: Result<Option<String>, BridgeError>,
    render: F,
) where
    A: DiscussionApi,
    F: Fn(PanelView),
{
    let tab_url = match tab_url {
        Ok(url) => url,
        Err(e) => {
            log::error!("{}", e);
            controller.borrow_mut().supersede();
            render(PanelView::connection_error());
            return;
        }
    };

    let trigger = controller.borrow_mut().trigger(tab_url.as_deref());
    match trigger {
        Trigger::Unsupported => render(PanelView::unsupported_page()),
        Trigger::Unchanged => log::debug!("Skipping search, URL unchanged"),
        Trigger::Search { key, generation } => {
            let Some(hostname) = key.hostname() else {
                log::error!("Not a URL: {}", key);
                render(PanelView::connection_error());
                return;
            };
            render(PanelView::loading(&hostname));

            let config = controller.borrow().config().clone();
            let threads = search_discussions(api, &key, &config).await;

            if !controller.borrow().is_current(generation) {
                log::debug!("Dropping stale results for {}", key);
                return;
            }
            render(PanelView::results(&key, threads, &config));
        }
    }
}
