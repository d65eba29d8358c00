/// Import page: paste many URLs, tag them all at once

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{ImportForm, import_tools};
use crate::error::SurfboardError;
use crate::storage::{Preferences, load_preferences};
use crate::ui::components::{Notice, NoticeBar, TagPicker};
use crate::ui::tool_form::input_value;

#[function_component(ImportView)]
pub fn import_view() -> Html {
    let preferences = use_state(Preferences::default);
    let notice = use_state(Notice::default);
    let form = use_state(ImportForm::default);

    {
        let preferences = preferences.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_preferences().await {
                    Ok(prefs) => preferences.set(prefs),
                    Err(e) => notice.set(Notice::failure("Could not load preferences", e)),
                }
            });
            || ()
        });
    }

    let on_field = |update: fn(&mut ImportForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*form).clone();
                update(&mut next, value);
                form.set(next);
            }
        })
    };

    let on_tags = {
        let form = form.clone();
        Callback::from(move |tags: Vec<String>| {
            let mut next = (*form).clone();
            next.preset_tags = tags;
            form.set(next);
        })
    };

    let on_import = {
        let preferences = preferences.clone();
        let notice = notice.clone();
        let form = form.clone();

        Callback::from(move |_| {
            let prefs = (*preferences).clone();
            let values = (*form).clone();
            let notice = notice.clone();
            let form = form.clone();

            notice.set(Notice::Working("Importing tools...".to_string()));

            spawn_local(async move {
                let result: Result<usize, SurfboardError> = async {
                    let client = prefs.client()?;
                    let member = prefs.member()?;
                    import_tools(&client, &values, member).await
                }
                .await;

                match result {
                    Ok(count) => {
                        notice.set(Notice::Success(format!("Imported {} tools! 🏄", count)));
                        form.set(ImportForm::default());
                    }
                    Err(SurfboardError::Validation(e)) => {
                        notice.set(Notice::failure(&e.to_string(), ""));
                    }
                    Err(e) => {
                        log::error!("Import failed: {}", e);
                        notice.set(Notice::failure("Import failed", e));
                    }
                }
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Import to Surfboard"}</h1>
            <NoticeBar notice={(*notice).clone()} />
            <div class="tool-form flex-column-gap">
                <label class="form-label">{"URLs (one per line)"}</label>
                <textarea
                    class="form-textarea"
                    placeholder={"https://unicorn.studio\nhttps://grainrad.com\nhttps://realtime-colors.com"}
                    value={form.urls.clone()}
                    oninput={on_field(|f, v| f.urls = v)}
                />

                <label class="form-label">{"Tags for all"}</label>
                <TagPicker selected={form.preset_tags.clone()} on_change={on_tags} />

                <label class="form-label">{"Custom Tags (optional)"}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="e.g. Gradients, Hero Sections"
                    value={form.custom_tags.clone()}
                    oninput={on_field(|f, v| f.custom_tags = v)}
                />

                <label class="form-label">{"Note for all (optional)"}</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="e.g. Found these on Twitter"
                    value={form.note.clone()}
                    oninput={on_field(|f, v| f.note = v)}
                />

                <Button onclick={on_import} disabled={notice.is_working()} variant={ButtonVariant::Primary}>
                    {"Import All"}
                </Button>
            </div>
        </div>
    }
}
