/// Extension pages, plus the helpers they share for connecting and opening or copying tools

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::spawn_track_open;
use crate::bridge;
use crate::storage::load_preferences;
use crate::supabase::SupabaseClient;
use crate::tool_data::Tool;
use components::Notice;

pub mod browse;
pub mod components;
pub mod edit;
pub mod import;
pub mod preferences;
pub mod save;
pub mod search;
pub mod tool_form;

/// Load preferences and build the table client, reporting problems as a notice
pub(crate) fn connect(client: UseStateHandle<Option<SupabaseClient>>, notice: UseStateHandle<Notice>) {
    spawn_local(async move {
        match load_preferences().await {
            Ok(prefs) => match prefs.client() {
                Ok(c) => client.set(Some(c)),
                Err(e) => notice.set(Notice::failure("Surfboard is not set up", e)),
            },
            Err(e) => notice.set(Notice::failure("Could not load preferences", e)),
        }
    });
}

/// Open a tool in a new tab and count the open in the background
pub(crate) fn open_callback(client: UseStateHandle<Option<SupabaseClient>>) -> Callback<Tool> {
    Callback::from(move |tool: Tool| {
        let url = tool.url.clone();
        spawn_local(async move {
            if let Err(e) = bridge::openUrl(&url).await {
                log::error!("Could not open {}: {:?}", url, e);
            }
        });

        if let Some(client) = (*client).clone() {
            spawn_track_open(client, tool);
        }
    })
}

pub(crate) fn copy_callback(notice: UseStateHandle<Notice>) -> Callback<Tool> {
    Callback::from(move |tool: Tool| {
        let notice = notice.clone();
        spawn_local(async move {
            match bridge::copyText(&tool.url).await {
                Ok(()) => notice.set(Notice::Success(format!("Copied {}", tool.url))),
                Err(e) => notice.set(Notice::failure("Copy failed", format!("{:?}", e))),
            }
        });
    })
}
