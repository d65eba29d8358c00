/// Browse page: every tool, one section per tag

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::list_state::{ListAction, ListState};
use crate::operations::group_by_tag;
use crate::search::fetch_popular;
use crate::supabase::SupabaseClient;
use crate::tool_data::Tool;
use crate::ui::components::{Notice, NoticeBar, ToolRow};
use crate::ui::edit::EditView;
use crate::ui::{connect, copy_callback, open_callback};

#[function_component(BrowseView)]
pub fn browse_view() -> Html {
    let client = use_state(|| None::<SupabaseClient>);
    let list = use_reducer(ListState::default);
    let notice = use_state(Notice::default);
    let editing = use_state(|| None::<Tool>);
    let reload = use_state(|| 0u32);

    {
        let client = client.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            connect(client, notice);
            || ()
        });
    }

    // Fetch once connected, and again after every edit
    {
        let list = list.clone();
        use_effect_with(((*client).clone(), *reload), move |(client, _)| {
            if let Some(client) = client.clone() {
                list.dispatch(ListAction::Begin);
                spawn_local(async move {
                    let outcome = fetch_popular(&client).await;
                    list.dispatch(ListAction::Finish(outcome));
                });
            }
            || ()
        });
    }

    let on_open = open_callback(client.clone());
    let on_copy = copy_callback(notice.clone());

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |tool: Tool| editing.set(Some(tool)))
    };

    let on_edited = {
        let editing = editing.clone();
        let notice = notice.clone();
        let reload = reload.clone();
        Callback::from(move |message: String| {
            editing.set(None);
            notice.set(Notice::Success(message));
            reload.set(*reload + 1);
        })
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_| reload.set(*reload + 1))
    };

    if let (Some(tool), Some(client)) = ((*editing).clone(), (*client).clone()) {
        return html! {
            <div class="container">
                <EditView {tool} {client} {on_edited} on_cancel={on_cancel_edit} />
            </div>
        };
    }

    let groups = group_by_tag(&list.tools);
    let connecting = client.is_none() && *notice == Notice::None;

    html! {
        <div class="container">
            <div class="header">
                <h1 class="main-title">{"Surfboard"}</h1>
                <Button onclick={on_refresh} variant={ButtonVariant::Secondary} disabled={list.loading()}>
                    {"🔄 Refresh"}
                </Button>
            </div>

            <NoticeBar notice={(*notice).clone()} />

            if list.loading() || connecting {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading tools..."}</p>
                </div>
            }

            if let Some(err) = &list.error {
                <Alert r#type={AlertType::Danger} title={"Could not load tools"} inline={true}>
                    {err.clone()}
                </Alert>
            }

            if list.is_empty() && !list.loading() && client.is_some() {
                <div class="empty-state">
                    <p>{"No tools saved yet."}</p>
                    <p class="empty-state-hint">{"Use Save or Import to add some."}</p>
                </div>
            } else {
                <div class="sections-list">
                    {for groups.iter().map(|(tag, tools)| html! {
                        <div key={tag.clone()} class="tag-section">
                            <h3 class="tag-title">
                                {tag}
                                <span class="tag-count">{format!("{} tools", tools.len())}</span>
                            </h3>
                            {for tools.iter().enumerate().map(|(i, tool)| html! {
                                <ToolRow
                                    key={format!("{}-{}", tool.id, i)}
                                    tool={tool.clone()}
                                    on_open={on_open.clone()}
                                    on_edit={on_edit.clone()}
                                    on_copy={on_copy.clone()}
                                />
                            })}
                        </div>
                    })}
                </div>
            }

            <div class="footer">
                {format!("{} tools • {} tags", list.tools.len(), groups.len())}
            </div>
        </div>
    }
}
