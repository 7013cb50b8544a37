use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Assets, Clones, JumpClones, Locations, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Assets {},

    #[route("/locations")]
    Locations {},

    #[route("/clones")]
    Clones {},

    #[route("/jump-clones")]
    JumpClones {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
