#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::{nav::TabBar, splash::SplashScreen, wallet::WalletContext};
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use pages::{market::Market, portfolio::Portfolio, profile::Profile, stats::GiftsStats};
use utils::{splash::configured_duration, telegram::init_web_app, wallet::{watch_account, WalletState}};

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[layout(TabBar)]
    #[route("/")]
    Profile {},
    #[route("/market")]
    Market {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/stats")]
    GiftsStats {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    static CSS: Asset = asset!("/assets/main.css");

    let mut loading = use_signal(|| true);
    let mut wallet_state = use_signal(|| WalletState::Disconnected);
    use_context_provider(|| WalletContext { state: wallet_state });

    use_hook(init_web_app);

    // keeps the shared wallet state in sync with the TonConnect widget
    use_future(move || async move {
        let mut watcher = watch_account();
        loop {
            match watcher.recv::<Option<String>>().await {
                Ok(address) => {
                    let state = WalletState::from_address(address);
                    info!("wallet status changed: {:?}", state);
                    wallet_state.set(state);
                },
                Err(e) => {
                    warn!("wallet watcher stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        document::Stylesheet {href: CSS},
        if loading() {
            SplashScreen {
                duration_ms: configured_duration(),
                on_complete: move |_| loading.set(false)
            }
        } else {
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Страница не найдена" }
            p { "Такой страницы нет в маркете." }
            pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
            Link { class: "cta-button", to: Route::Profile {}, "В профиль" }
        }
    }
}
