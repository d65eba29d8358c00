/// Search page: type keywords, match names, notes and tags

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::list_state::{ListAction, ListState};
use crate::search::search;
use crate::supabase::SupabaseClient;
use crate::tool_data::Tool;
use crate::ui::components::{Notice, NoticeBar, ToolRow};
use crate::ui::edit::EditView;
use crate::ui::tool_form::input_value;
use crate::ui::{connect, copy_callback, open_callback};

#[function_component(SearchView)]
pub fn search_view() -> Html {
    let client = use_state(|| None::<SupabaseClient>);
    let list = use_reducer(ListState::default);
    let notice = use_state(Notice::default);
    let search_text = use_state(String::new);
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

    // Every keystroke starts a fresh search; responses are applied as they land
    {
        let list = list.clone();
        use_effect_with(
            ((*client).clone(), (*search_text).clone(), *reload),
            move |(client, query, _)| {
                if let Some(client) = client.clone() {
                    let query = query.clone();
                    list.dispatch(ListAction::Begin);
                    spawn_local(async move {
                        let outcome = search(&client, &query).await;
                        list.dispatch(ListAction::Finish(outcome));
                    });
                }
                || ()
            },
        );
    }

    let on_search_input = {
        let search_text = search_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                search_text.set(value);
            }
        })
    };

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

    if let (Some(tool), Some(client)) = ((*editing).clone(), (*client).clone()) {
        return html! {
            <div class="container">
                <EditView {tool} {client} {on_edited} on_cancel={on_cancel_edit} />
            </div>
        };
    }

    let connecting = client.is_none() && *notice == Notice::None;

    html! {
        <div class="container">
            <h1 class="main-title">{"Search Surfboard"}</h1>

            <div class="search-container">
                <input
                    type="text"
                    placeholder="What do you need? (e.g. background, icons, fonts)"
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    class="search-input"
                />
            </div>

            <NoticeBar notice={(*notice).clone()} />

            if list.loading() || connecting {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }

            if let Some(err) = &list.error {
                <Alert r#type={AlertType::Danger} title={"Search failed"} inline={true}>
                    {err.clone()}
                </Alert>
            }

            if list.is_empty() && !list.loading() && client.is_some() {
                <div class="empty-state">
                    if search_text.is_empty() {
                        <p>{"No tools saved yet."}</p>
                    } else {
                        <p>{"No tools match your search."}</p>
                    }
                </div>
            } else {
                <div class="tools-list">
                    {for list.tools.iter().map(|tool| html! {
                        <ToolRow
                            key={tool.id.to_string()}
                            tool={tool.clone()}
                            show_tags={true}
                            on_open={on_open.clone()}
                            on_edit={on_edit.clone()}
                            on_copy={on_copy.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
