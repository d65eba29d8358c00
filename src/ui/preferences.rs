/// Preferences page: display name and Supabase connection

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::storage::{Preferences, load_preferences, save_preferences};
use crate::ui::components::{Notice, NoticeBar};
use crate::ui::tool_form::input_value;

#[function_component(PreferencesView)]
pub fn preferences_view() -> Html {
    let preferences = use_state(Preferences::default);
    let notice = use_state(|| Notice::Working("Loading preferences...".to_string()));

    {
        let preferences = preferences.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_preferences().await {
                    Ok(prefs) => {
                        preferences.set(prefs);
                        notice.set(Notice::None);
                    }
                    Err(e) => notice.set(Notice::failure("Could not load preferences", e)),
                }
            });
            || ()
        });
    }

    let on_field = |update: fn(&mut Preferences, String)| {
        let preferences = preferences.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*preferences).clone();
                update(&mut next, value);
                preferences.set(next);
            }
        })
    };

    let on_save = {
        let preferences = preferences.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            let prefs = (*preferences).clone();
            let notice = notice.clone();
            spawn_local(async move {
                match save_preferences(&prefs).await {
                    Ok(()) => notice.set(Notice::Success("Preferences saved".to_string())),
                    Err(e) => {
                        log::error!("{}", e);
                        notice.set(Notice::failure("Could not save preferences", e));
                    }
                }
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Surfboard Preferences"}</h1>
            <NoticeBar notice={(*notice).clone()} />
            <div class="tool-form flex-column-gap">
                <label class="form-label">{"Your Name"}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Shown as \"saved by\" on your tools"
                    value={preferences.member_name.clone()}
                    oninput={on_field(|p, v| p.member_name = v)}
                />

                <label class="form-label">{"Supabase URL"}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="https://your-project.supabase.co"
                    value={preferences.supabase_url.clone()}
                    oninput={on_field(|p, v| p.supabase_url = v)}
                />

                <label class="form-label">{"Supabase Anon Key"}</label>
                <input
                    type="password"
                    class="form-input"
                    value={preferences.supabase_anon_key.clone()}
                    oninput={on_field(|p, v| p.supabase_anon_key = v)}
                />

                <Button onclick={on_save} disabled={notice.is_working()} variant={ButtonVariant::Primary}>
                    {"Save Preferences"}
                </Button>
            </div>
        </div>
    }
}
