//! Root app component: service wiring, theme restore, page switching.

use dioxus::prelude::*;

use crate::prefs;
use crate::state::{AppContext, Page, Services};
use crate::theme::{ThemedRoot, CURRENT_THEME};

/// Root application component.
#[component]
pub fn App() -> Element {
    let services = use_signal(Services::init);

    // Restore the persisted theme once at startup.
    use_effect(|| {
        if let Some(saved) = prefs::load_theme(&prefs::default_data_dir()) {
            *CURRENT_THEME.write() = saved;
        }
    });

    match services.read().as_ref() {
        Err(e) => rsx! {
            ThemedRoot {
                div { class: "startup-error",
                    div { class: "startup-error-title", "Startup failed" }
                    div { class: "startup-error-text", "{e}" }
                }
            }
        },
        Ok(services) => rsx! {
            Shell { services: ServicesArc(services.clone()) }
        },
    }
}

/// Newtype wrapper so `Arc<Services>` satisfies `#[component]`'s `PartialEq`
/// bound. Equality is by pointer identity.
#[derive(Clone)]
pub struct ServicesArc(pub std::sync::Arc<Services>);

impl PartialEq for ServicesArc {
    fn eq(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Provides the shared context and renders the active page.
#[component]
fn Shell(services: ServicesArc) -> Element {
    let ctx = use_context_provider(|| AppContext {
        user_name: Signal::new(std::env::var("LINGUA_USER").unwrap_or_default()),
        page: Signal::new(Page::Main),
        services: Signal::new(services.0.clone()),
    });

    let page = *ctx.page.read();

    rsx! {
        ThemedRoot {
            match page {
                Page::Main => rsx! { super::main_page::MainPage {} },
                Page::Chat => rsx! { super::chat_page::ChatPage {} },
                Page::History => rsx! { super::history_page::HistoryPage {} },
            }
        }
    }
}
