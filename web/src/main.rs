use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, Notes, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/notes")]
    Notes {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the notes screen, or the auth screen when logged out.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let session = ui::use_session();
    if session().is_logged_in() {
        nav.replace(Route::Notes {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
