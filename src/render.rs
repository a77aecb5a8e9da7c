//! Plain-text rendering of view models for the command line

use crate::validation::ValidationErrors;
use crate::view::{ColumnItem, Detail, Icon, ListItem};

/// Render a column of cards under a heading
///
/// # Arguments
/// * `heading` - Column title
/// * `items` - Cards in display order
///
/// # Returns
/// The heading, then one block per card, or a "No items" line
pub fn format_column(heading: &str, items: &[ColumnItem]) -> String {
    let mut result = format!("== {} ({}) ==\n", heading, items.len());
    if items.is_empty() {
        result.push_str("No items\n");
        return result;
    }

    for item in items {
        result.push_str(&format!("- [{}] {}", item.id, item.title));
        if let Some(priority) = item.priority {
            result.push_str(&format!(" ({})", priority));
        }
        result.push('\n');

        if let Some(ref author) = item.author {
            result.push_str(&format!("  By: {} <{}>\n", author.name, author.email));
        }
        if let Some(ref text) = item.text {
            result.push_str(&format!("  {}\n", text));
        }
        for row in &item.rows {
            result.push_str(&format!("  {}: {}\n", row.name, row.value));
        }
        if let Some(ref href) = item.href {
            result.push_str(&format!("  Link: {}\n", href));
        }
    }

    result
}

/// Render a list view under a heading
pub fn format_list(heading: &str, items: &[ListItem]) -> String {
    let mut result = format!("== {} ({}) ==\n", heading, items.len());
    if items.is_empty() {
        result.push_str("No items\n");
        return result;
    }

    for item in items {
        match item.right {
            Some(right) => result.push_str(&format!("- {} [#{}]\n", item.title, right)),
            None => result.push_str(&format!("- {}\n", item.title)),
        }
        let data: Vec<String> = item
            .data
            .iter()
            .map(|datum| match datum.icon {
                Some(icon) => format!("{} {}", icon_label(icon), datum.text),
                None => datum.text.clone(),
            })
            .collect();
        if !data.is_empty() {
            result.push_str(&format!("  {}\n", data.join(" | ")));
        }
        if let Some(ref href) = item.href {
            result.push_str(&format!("  Link: {}\n", href));
        }
    }

    result
}

fn icon_label(icon: Icon) -> &'static str {
    match icon {
        Icon::Sunrise => "from",
        Icon::Sunset => "until",
        Icon::People => "with",
        Icon::Dollar => "amount",
        Icon::Status => "status",
    }
}

/// Render a detail panel as aligned `title: value` lines
pub fn format_details(details: &[Detail]) -> String {
    let width = details.iter().map(|d| d.title.len()).max().unwrap_or(0);
    details
        .iter()
        .map(|d| format!("{:width$}  {}\n", d.title, d.value, width = width))
        .collect()
}

/// Render breadcrumbs joined with ` > `; `(root)` when there are none
pub fn format_breadcrumbs(crumbs: &[String]) -> String {
    if crumbs.is_empty() {
        "(root)".to_string()
    } else {
        crumbs.join(" > ")
    }
}

/// One line per issue, e.g. `title: Title is required`
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .issues()
        .iter()
        .map(|issue| format!("{}: {}\n", issue.field, issue.message))
        .collect()
}
