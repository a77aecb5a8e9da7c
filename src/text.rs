//! String helpers for headings and breadcrumbs

/// Uppercase the first character and leave the rest untouched
///
/// Only the very first character is considered, so a string that starts
/// with whitespace, a digit or a symbol comes back unchanged.
///
/// # Examples
/// ```
/// use projectboard::text::capitalize_first_letter;
/// assert_eq!(capitalize_first_letter("hELLo"), "HELLo");
/// assert_eq!(capitalize_first_letter(" hello"), " hello");
/// assert_eq!(capitalize_first_letter(""), "");
/// ```
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a URL path into breadcrumb labels
///
/// Empty segments are dropped, which collapses leading, trailing and
/// repeated slashes. Query strings are not parsed: `?status=active` stays
/// part of the segment it is attached to.
///
/// # Examples
/// ```
/// use projectboard::text::map_pathname_to_location_array;
/// assert_eq!(
///     map_pathname_to_location_array("/projects///123//tasks/"),
///     vec!["Projects", "123", "Tasks"]
/// );
/// assert!(map_pathname_to_location_array("/").is_empty());
/// ```
pub fn map_pathname_to_location_array(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first_letter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize_first_letter("élan"), "Élan");
    }

    #[test]
    fn test_query_segment_kept_verbatim() {
        assert_eq!(
            map_pathname_to_location_array("/projects?status=active"),
            vec!["Projects?status=active"]
        );
    }
}
