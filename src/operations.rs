/// Tool operations: grouping by tag, text matching

use std::collections::BTreeMap;

use crate::tool_data::Tool;

/// Group tools into one bucket per tag
///
/// A tool with N tags lands in N buckets. Bucket contents keep the order of
/// `tools`; the map iterates tag names in ascending, case-sensitive order,
/// which is the section order on the browse page. Tools without tags are
/// skipped.
pub fn group_by_tag(tools: &[Tool]) -> BTreeMap<String, Vec<Tool>> {
    tools.iter().fold(BTreeMap::new(), |mut groups, tool| {
        for tag in &tool.tags {
            groups
                .entry(tag.clone())
                .or_insert_with(Vec::new)
                .push(tool.clone());
        }
        groups
    })
}

/// Case-insensitive substring match against name, note or any tag
///
/// `needle` must already be lowercased.
pub fn matches_query(tool: &Tool, needle: &str) -> bool {
    tool.name.to_lowercase().contains(needle)
        || tool.note().to_lowercase().contains(needle)
        || tool.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Keep the tools matching `query`, in their original order
///
/// An empty query keeps everything.
pub fn filter_tools(tools: Vec<Tool>, query: &str) -> Vec<Tool> {
    if query.is_empty() {
        return tools;
    }

    let needle = query.to_lowercase();
    tools
        .into_iter()
        .filter(|tool| matches_query(tool, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_tool(n: u128, name: &str, tags: &[&str]) -> Tool {
        Tool {
            id: Uuid::from_u128(n),
            url: format!("https://{}.example", n),
            name: name.to_string(),
            description: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            favicon_url: None,
            saved_by: "Mia".to_string(),
            times_opened: 0,
            created_at: None,
        }
    }

    fn names(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_group_by_tag_shared_bucket() {
        let tools = vec![
            create_test_tool(1, "Unicorn Studio", &["Backgrounds & Textures", "Animation & Motion"]),
            create_test_tool(2, "Grainrad", &["Backgrounds & Textures"]),
        ];

        let groups = group_by_tag(&tools);

        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Animation & Motion", "Backgrounds & Textures"]);
        assert_eq!(names(&groups["Backgrounds & Textures"]), vec!["Unicorn Studio", "Grainrad"]);
        assert_eq!(names(&groups["Animation & Motion"]), vec!["Unicorn Studio"]);
    }

    #[test]
    fn test_group_by_tag_keeps_source_order() {
        let tools = vec![
            create_test_tool(1, "Most opened", &["Icons"]),
            create_test_tool(2, "Middle", &["Fonts & Typography"]),
            create_test_tool(3, "Least opened", &["Icons"]),
        ];

        let groups = group_by_tag(&tools);

        assert_eq!(names(&groups["Icons"]), vec!["Most opened", "Least opened"]);
    }

    #[test]
    fn test_group_by_tag_case_sensitive_order() {
        let tools = vec![create_test_tool(1, "A", &["icons", "Web Inspo", "Icons"])];

        let groups = group_by_tag(&tools);

        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Icons", "Web Inspo", "icons"]);
    }

    #[test]
    fn test_group_by_tag_tolerates_untagged() {
        let tools = vec![
            create_test_tool(1, "Untagged", &[]),
            create_test_tool(2, "Tagged", &["Icons"]),
        ];

        let groups = group_by_tag(&tools);

        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups["Icons"]), vec!["Tagged"]);
    }

    #[test]
    fn test_group_by_tag_is_repeatable() {
        let tools = vec![
            create_test_tool(1, "Unicorn Studio", &["Backgrounds & Textures", "Animation & Motion"]),
            create_test_tool(2, "Grainrad", &["Backgrounds & Textures"]),
        ];

        assert_eq!(group_by_tag(&tools), group_by_tag(&tools));
    }

    #[test]
    fn test_group_by_tag_empty() {
        assert!(group_by_tag(&[]).is_empty());
    }

    #[test]
    fn test_filter_matches_tag_substring() {
        let tools = vec![
            create_test_tool(1, "Unicorn Studio", &["Backgrounds & Textures"]),
            create_test_tool(2, "Coolors", &["Color Tools"]),
        ];

        let results = filter_tools(tools, "back");

        assert_eq!(names(&results), vec!["Unicorn Studio"]);
    }

    #[test]
    fn test_filter_matches_name_and_note_case_insensitive() {
        let mut noted = create_test_tool(2, "Coolors", &["Color Tools"]);
        noted.description = Some("Palette GENERATOR".to_string());
        let tools = vec![
            create_test_tool(1, "Generative Grain", &["Backgrounds & Textures"]),
            noted,
            create_test_tool(3, "Lucide", &["Icons"]),
        ];

        let results = filter_tools(tools, "Generat");

        assert_eq!(names(&results), vec!["Generative Grain", "Coolors"]);
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let tools = vec![
            create_test_tool(1, "Lucide", &["Icons"]),
            create_test_tool(2, "Coolors", &["Color Tools"]),
        ];

        assert_eq!(filter_tools(tools.clone(), ""), tools);
    }

    #[test]
    fn test_filter_treats_wildcards_literally() {
        let tools = vec![
            create_test_tool(1, "Lucide", &["Icons"]),
            create_test_tool(2, "100% free", &["Icons"]),
        ];

        let results = filter_tools(tools, "%");

        assert_eq!(names(&results), vec!["100% free"]);
    }
}
