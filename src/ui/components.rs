/// Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::tags::PRESET_TAGS;
use crate::tool_data::Tool;

/// Page-level notification (the extension's toast)
#[derive(Clone, PartialEq, Default)]
pub enum Notice {
    #[default]
    None,
    Working(String),
    Success(String),
    Failure { title: String, message: String },
}

impl Notice {
    pub fn failure(title: &str, message: impl ToString) -> Notice {
        Notice::Failure {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_working(&self) -> bool {
        matches!(self, Notice::Working(_))
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBarProps {
    pub notice: Notice,
}

#[function_component(NoticeBar)]
pub fn notice_bar(props: &NoticeBarProps) -> Html {
    match &props.notice {
        Notice::None => html! {},
        Notice::Working(msg) => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{msg}</p>
            </div>
        },
        Notice::Success(msg) => html! {
            <Alert r#type={AlertType::Success} title={msg.clone()} inline={true}>
            </Alert>
        },
        Notice::Failure { title, message } => html! {
            <Alert r#type={AlertType::Danger} title={title.clone()} inline={true}>
                {message.clone()}
            </Alert>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct TagPickerProps {
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Checkbox list of preset tags; keeps selections in preset order
#[function_component(TagPicker)]
pub fn tag_picker(props: &TagPickerProps) -> Html {
    html! {
        <div class="tag-picker">
            {for PRESET_TAGS.iter().map(|tag| {
                let tag: &'static str = tag;
                let checked = props.selected.iter().any(|s| s == tag);
                let onchange = {
                    let selected = props.selected.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: Event| {
                        let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                            return;
                        };
                        let next: Vec<String> = PRESET_TAGS
                            .iter()
                            .filter(|t| {
                                if **t == tag {
                                    input.checked()
                                } else {
                                    selected.iter().any(|s| s == **t)
                                }
                            })
                            .map(|t| t.to_string())
                            .collect();
                        on_change.emit(next);
                    })
                };

                html! {
                    <label key={tag} class="tag-option">
                        <input type="checkbox" checked={checked} {onchange} />
                        {tag}
                    </label>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolRowProps {
    pub tool: Tool,
    #[prop_or(false)]
    pub show_tags: bool,
    pub on_open: Callback<Tool>,
    pub on_edit: Callback<Tool>,
    pub on_copy: Callback<Tool>,
}

#[function_component(ToolRow)]
pub fn tool_row(props: &ToolRowProps) -> Html {
    let tool = &props.tool;

    let reform = |callback: &Callback<Tool>| {
        let tool = tool.clone();
        callback.reform(move |_: MouseEvent| tool.clone())
    };

    html! {
        <div class="tool-item">
            <div class="tool-icon">
                if let Some(icon) = &tool.favicon_url {
                    <img src={icon.clone()} width="16" height="16" alt="" />
                } else {
                    {"🌐"}
                }
            </div>
            <div class="tool-content">
                <div class="tool-title">{&tool.name}</div>
                <div class="tool-note">{tool.note()}</div>
            </div>
            <div class="tool-accessories">
                if props.show_tags {
                    <span class="tool-tags">{format!("🏷 {}", tool.tags.join(", "))}</span>
                }
                <span class="tool-saved-by">{format!("by {}", tool.saved_by)}</span>
                <span class="tool-opened">{format!("{}×", tool.times_opened)}</span>
            </div>
            <div class="tool-actions">
                <Button onclick={reform(&props.on_open)} size={ButtonSize::Small}>
                    {"Open"}
                </Button>
                <Button onclick={reform(&props.on_edit)} variant={ButtonVariant::Secondary} size={ButtonSize::Small}>
                    {"✏️"}
                </Button>
                <Button onclick={reform(&props.on_copy)} variant={ButtonVariant::Secondary} size={ButtonSize::Small}>
                    {"📋"}
                </Button>
            </div>
        </div>
    }
}
