/// Surfboard - shared design-tool bookmarks for a team
/// Built with Rust + WASM + Yew, backed by a Supabase `tools` table

pub mod actions;
mod bridge;
pub mod domain;
pub mod error;
pub mod list_state;
pub mod operations;
pub mod search;
pub mod storage;
pub mod store;
pub mod supabase;
pub mod tags;
pub mod tool_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Favicon link for a URL, as stored in `favicon_url`
#[wasm_bindgen]
pub fn favicon_for(url: &str) -> Option<String> {
    domain::hostname(url).ok().map(|host| domain::favicon_url(&host))
}

#[wasm_bindgen]
pub fn start_browse() {
    yew::Renderer::<ui::browse::BrowseView>::new().render();
}

#[wasm_bindgen]
pub fn start_search() {
    yew::Renderer::<ui::search::SearchView>::new().render();
}

#[wasm_bindgen]
pub fn start_save() {
    yew::Renderer::<ui::save::SaveView>::new().render();
}

#[wasm_bindgen]
pub fn start_import() {
    yew::Renderer::<ui::import::ImportView>::new().render();
}

#[wasm_bindgen]
pub fn start_preferences() {
    yew::Renderer::<ui::preferences::PreferencesView>::new().render();
}
