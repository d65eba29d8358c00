/// Save page: add one tool to the shared collection

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{ToolForm, save_tool};
use crate::error::SurfboardError;
use crate::storage::{Preferences, load_preferences};
use crate::ui::components::{Notice, NoticeBar};
use crate::ui::tool_form::ToolFormView;

#[function_component(SaveView)]
pub fn save_view() -> Html {
    let preferences = use_state(Preferences::default);
    let notice = use_state(Notice::default);
    // Bumped after a successful save to remount a blank form
    let generation = use_state(|| 0u32);

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

    let on_submit = {
        let preferences = preferences.clone();
        let notice = notice.clone();
        let generation = generation.clone();

        Callback::from(move |form: ToolForm| {
            let prefs = (*preferences).clone();
            let notice = notice.clone();
            let generation = generation.clone();

            notice.set(Notice::Working("Saving...".to_string()));

            spawn_local(async move {
                let result: Result<String, SurfboardError> = async {
                    let client = prefs.client()?;
                    let member = prefs.member()?;
                    save_tool(&client, &form, member).await
                }
                .await;

                match result {
                    Ok(message) => {
                        notice.set(Notice::Success(format!("Saved! 🏄 {}", message)));
                        generation.set(*generation + 1);
                    }
                    Err(SurfboardError::Validation(e)) => {
                        notice.set(Notice::failure(&e.to_string(), ""));
                    }
                    Err(e) => {
                        log::error!("Save failed: {}", e);
                        notice.set(Notice::failure("Failed to save", e));
                    }
                }
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Save to Surfboard"}</h1>
            <NoticeBar notice={(*notice).clone()} />
            <ToolFormView
                key={*generation}
                initial={ToolForm::default()}
                submit_label="Save to Surfboard"
                busy={notice.is_working()}
                {on_submit}
            />
        </div>
    }
}
