use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CircleView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/circle", CircleView)] Circle {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "topbar-brand", "KarmaLab" }
                nav { class: "topbar-nav",
                    Link { to: Route::Home {}, "Coach" }
                    Link { to: Route::Circle {}, "Circle Tutorial" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
