//! # client
//!
//! Leptos + WASM front-end for StudyPodcast: turn class notes (PDF) into a
//! podcast episode. Pages issue HTTP requests to the external podcast API and
//! drive the shared [`podcast::Wizard`] for the upload → script → audio flow.
//!
//! Built twice: with `hydrate` for the browser bundle and with `ssr` for the
//! `server` crate, which renders the same routes on the first request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
