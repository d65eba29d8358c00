/// Write flows: save, bulk import, edit and open-tracking

use uuid::Uuid;

use crate::domain::{favicon_url, hostname, import_identity, is_web_url};
use crate::error::{RemoteError, SurfboardError, ValidationError};
use crate::store::{Filter, ToolStore};
use crate::tags::{merge_tags, split_tags};
use crate::tool_data::{NewTool, Tool, ToolPatch, note_or_none};

/// Values of the save / edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolForm {
    pub url: String,
    pub name: String,
    pub preset_tags: Vec<String>,
    pub custom_tags: String,
    pub note: String,
}

impl ToolForm {
    /// Pre-filled form for editing an existing tool
    pub fn from_tool(tool: &Tool) -> ToolForm {
        let (preset_tags, custom_tags) = split_tags(&tool.tags);
        ToolForm {
            url: tool.url.clone(),
            name: tool.name.clone(),
            preset_tags,
            custom_tags,
            note: tool.note().to_string(),
        }
    }
}

/// Values of the bulk import form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportForm {
    pub urls: String,
    pub preset_tags: Vec<String>,
    pub custom_tags: String,
    pub note: String,
}

/// Validated url, name and tags shared by save and edit
struct CheckedForm {
    url: String,
    name: String,
    tags: Vec<String>,
}

fn check_form(form: &ToolForm) -> Result<CheckedForm, ValidationError> {
    let tags = merge_tags(&form.preset_tags, &form.custom_tags)?;

    let url = form.url.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingField("URL"));
    }
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("Tool name"));
    }

    Ok(CheckedForm {
        url: url.to_string(),
        name: name.to_string(),
        tags,
    })
}

/// Build the row for a single saved tool
pub fn build_new_tool(form: &ToolForm, saved_by: &str) -> Result<NewTool, ValidationError> {
    let checked = check_form(form)?;
    let host = hostname(&checked.url).map_err(|_| ValidationError::InvalidUrl(checked.url.clone()))?;

    Ok(NewTool {
        url: checked.url,
        name: checked.name,
        tags: checked.tags,
        description: note_or_none(&form.note),
        favicon_url: Some(favicon_url(&host)),
        saved_by: saved_by.to_string(),
    })
}

/// Build the patch for an edited tool
///
/// Only url, name, tags and note change; the stored favicon is left as is
/// and the url is not re-parsed, so rows imported with a raw url stay
/// editable.
pub fn build_edit_patch(form: &ToolForm) -> Result<ToolPatch, ValidationError> {
    let checked = check_form(form)?;

    Ok(ToolPatch {
        url: Some(checked.url),
        name: Some(checked.name),
        tags: Some(checked.tags),
        description: Some(note_or_none(&form.note)),
        favicon_url: None,
        times_opened: None,
    })
}

/// Build one row per pasted URL, all sharing tags and note
///
/// Tags are checked first; then only non-empty lines starting with
/// `http://` or `https://` are kept.
pub fn build_import_rows(form: &ImportForm, saved_by: &str) -> Result<Vec<NewTool>, ValidationError> {
    let tags = merge_tags(&form.preset_tags, &form.custom_tags)?;

    let rows: Vec<NewTool> = form
        .urls
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_web_url(line))
        .map(|url| {
            let (domain, name) = import_identity(url);
            NewTool {
                url: url.to_string(),
                name,
                tags: tags.clone(),
                description: note_or_none(&form.note),
                favicon_url: Some(favicon_url(&domain)),
                saved_by: saved_by.to_string(),
            }
        })
        .collect();

    if rows.is_empty() {
        Err(ValidationError::NoImportUrls)
    } else {
        Ok(rows)
    }
}

/// Toast text after a save: "Lucide saved with 2 tags"
pub fn saved_message(name: &str, tag_count: usize) -> String {
    format!(
        "{} saved with {} tag{}",
        name,
        tag_count,
        if tag_count == 1 { "" } else { "s" }
    )
}

/// Validate and insert one tool; returns the success message
pub async fn save_tool<S: ToolStore>(
    store: &S,
    form: &ToolForm,
    saved_by: &str,
) -> Result<String, SurfboardError> {
    let row = build_new_tool(form, saved_by)?;
    store.insert(std::slice::from_ref(&row)).await?;

    log::info!("Saved {} with {} tags", row.name, row.tags.len());
    Ok(saved_message(&row.name, row.tags.len()))
}

/// Validate and bulk insert; returns how many tools were imported
pub async fn import_tools<S: ToolStore>(
    store: &S,
    form: &ImportForm,
    saved_by: &str,
) -> Result<usize, SurfboardError> {
    let rows = build_import_rows(form, saved_by)?;
    store.insert(&rows).await?;

    log::info!("Imported {} tools", rows.len());
    Ok(rows.len())
}

/// Validate and update an existing tool by id
pub async fn edit_tool<S: ToolStore>(
    store: &S,
    id: Uuid,
    form: &ToolForm,
) -> Result<(), SurfboardError> {
    let patch = build_edit_patch(form)?;
    store.update(&patch, &Filter::eq("id", id)).await?;

    log::info!("Updated tool {}", id);
    Ok(())
}

/// Bump the open counter of `tool` by one
///
/// Read-modify-write from the caller's copy; concurrent opens can
/// under-count.
pub async fn track_open<S: ToolStore>(store: &S, tool: &Tool) -> Result<(), RemoteError> {
    let patch = ToolPatch::times_opened(tool.times_opened.saturating_add(1));
    store.update(&patch, &Filter::eq("id", tool.id)).await
}

/// Fire-and-forget open-tracking; failures are only logged
pub fn spawn_track_open<S: ToolStore + 'static>(store: S, tool: Tool) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = track_open(&store, &tool).await {
            log::warn!("Could not record open of {}: {}", tool.name, e);
        }
    });
}
