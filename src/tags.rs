/// Tag handling: preset categories and merging picked + typed tags
use crate::error::ValidationError;

/// Categories offered by the tag picker on every form
pub const PRESET_TAGS: [&str; 13] = [
    "Backgrounds & Textures",
    "Icons",
    "Fonts & Typography",
    "Color Tools",
    "Mockups & Prototyping",
    "Animation & Motion",
    "Stock Photos & Video",
    "CSS & Code Tools",
    "Web Inspo",
    "Product Inspo",
    "App Inspo",
    "Bento & Illustrations",
    "Brand & Logos",
];

pub fn is_preset(tag: &str) -> bool {
    PRESET_TAGS.contains(&tag)
}

/// Combine picked preset tags with comma-separated custom tags
///
/// Preset tags keep their order and come first, followed by each custom
/// tag trimmed of whitespace, with empty entries dropped. Duplicates are
/// kept as given. An empty result is rejected so that no write goes out
/// without a tag.
///
/// Examples:
/// - `(["Icons"], "gradients, Hero Sections, ")` → `["Icons", "gradients", "Hero Sections"]`
/// - `([], " , ")` → `Err(NoTags)`
pub fn merge_tags(preset: &[String], custom: &str) -> Result<Vec<String>, ValidationError> {
    let tags: Vec<String> = preset
        .iter()
        .cloned()
        .chain(
            custom
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
        )
        .collect();

    if tags.is_empty() {
        Err(ValidationError::NoTags)
    } else {
        Ok(tags)
    }
}

/// Split stored tags back into picker selections and custom-tag text
///
/// Used to pre-fill the edit form.
pub fn split_tags(tags: &[String]) -> (Vec<String>, String) {
    let (preset, custom): (Vec<String>, Vec<String>) =
        tags.iter().cloned().partition(|tag| is_preset(tag));

    (preset, custom.join(", "))
}
