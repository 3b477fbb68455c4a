use dioxus::prelude::*;

use stillframe_core::Catalog;

use crate::pages::{CollectionPage, Home};
use crate::theme::{ThemeMode, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Single-page portfolio (work, collections, clients, about, contact)
/// - `/collections/:slug` - Full gallery for one collection
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/collections/:slug")]
    CollectionPage { slug: String },
}

/// Root application component.
///
/// Provides global styles, the catalog and theme contexts, and routing.
#[component]
pub fn App() -> Element {
    // Catalog is loaded in main before launch; theme reads the environment
    // once here and only changes through the toggle entry point.
    let catalog: Signal<Catalog> = use_signal(crate::catalog);
    let theme: Signal<ThemeMode> = use_signal(ThemeMode::detect);

    // Provide catalog and theme context to all child components
    use_context_provider(|| catalog);
    use_context_provider(|| theme);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "site", "data-theme": "{theme().attr()}",
            Router::<Route> {}
        }
    }
}
