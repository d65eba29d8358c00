/// Form shared by the save page and the edit view

use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::actions::ToolForm;
use crate::ui::components::TagPicker;

/// Current value of the `<input>` or `<textarea>` that fired `e`
pub fn input_value(e: &InputEvent) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[derive(Properties, PartialEq)]
pub struct ToolFormViewProps {
    pub initial: ToolForm,
    pub submit_label: AttrValue,
    #[prop_or(false)]
    pub busy: bool,
    pub on_submit: Callback<ToolForm>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(ToolFormView)]
pub fn tool_form_view(props: &ToolFormViewProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let on_field = |update: fn(&mut ToolForm, String)| {
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

    let on_submit = {
        let form = form.clone();
        props.on_submit.reform(move |_: MouseEvent| (*form).clone())
    };

    html! {
        <div class="tool-form flex-column-gap">
            <label class="form-label">{"URL"}</label>
            <input
                type="text"
                class="form-input"
                placeholder="https://unicorn.studio"
                value={form.url.clone()}
                oninput={on_field(|f, v| f.url = v)}
            />

            <label class="form-label">{"Tool Name"}</label>
            <input
                type="text"
                class="form-input"
                placeholder="Unicorn Studio"
                value={form.name.clone()}
                oninput={on_field(|f, v| f.name = v)}
            />

            <label class="form-label">{"Tags"}</label>
            <TagPicker selected={form.preset_tags.clone()} on_change={on_tags} />

            <label class="form-label">{"Custom Tags (optional)"}</label>
            <input
                type="text"
                class="form-input"
                placeholder="e.g. Gradients, Hero Sections, WebGL"
                value={form.custom_tags.clone()}
                oninput={on_field(|f, v| f.custom_tags = v)}
            />

            <label class="form-label">{"Quick Note (optional)"}</label>
            <textarea
                class="form-textarea"
                placeholder="Great for animated gradient backgrounds"
                value={form.note.clone()}
                oninput={on_field(|f, v| f.note = v)}
            />

            <div class="form-actions">
                <Button onclick={on_submit} disabled={props.busy} variant={ButtonVariant::Primary}>
                    {props.submit_label.clone()}
                </Button>
                if let Some(on_cancel) = &props.on_cancel {
                    <Button
                        onclick={on_cancel.reform(|_| ())}
                        disabled={props.busy}
                        variant={ButtonVariant::Secondary}
                    >
                        {"Cancel"}
                    </Button>
                }
            </div>
        </div>
    }
}
