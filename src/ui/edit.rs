/// Edit view, opened from the browse and search lists

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{ToolForm, edit_tool};
use crate::error::SurfboardError;
use crate::supabase::SupabaseClient;
use crate::tool_data::Tool;
use crate::ui::components::{Notice, NoticeBar};
use crate::ui::tool_form::ToolFormView;

#[derive(Properties, PartialEq)]
pub struct EditViewProps {
    pub tool: Tool,
    pub client: SupabaseClient,
    /// Called after a successful update; the owner re-fetches its list
    pub on_edited: Callback<String>,
    pub on_cancel: Callback<()>,
}

#[function_component(EditView)]
pub fn edit_view(props: &EditViewProps) -> Html {
    let notice = use_state(Notice::default);

    let on_submit = {
        let notice = notice.clone();
        let client = props.client.clone();
        let id = props.tool.id;
        let on_edited = props.on_edited.clone();

        Callback::from(move |form: ToolForm| {
            let notice = notice.clone();
            let client = client.clone();
            let on_edited = on_edited.clone();

            notice.set(Notice::Working("Updating...".to_string()));

            spawn_local(async move {
                match edit_tool(&client, id, &form).await {
                    Ok(()) => {
                        notice.set(Notice::None);
                        on_edited.emit("Updated! 🏄".to_string());
                    }
                    Err(SurfboardError::Validation(e)) => {
                        notice.set(Notice::failure(&e.to_string(), ""));
                    }
                    Err(e) => {
                        log::error!("Update failed: {}", e);
                        notice.set(Notice::failure("Failed to update", e));
                    }
                }
            });
        })
    };

    html! {
        <div class="edit-view">
            <h2 class="edit-title">{format!("Edit {}", props.tool.name)}</h2>
            <NoticeBar notice={(*notice).clone()} />
            <ToolFormView
                initial={ToolForm::from_tool(&props.tool)}
                submit_label="Save Changes"
                busy={notice.is_working()}
                {on_submit}
                on_cancel={props.on_cancel.clone()}
            />
        </div>
    }
}
