//! Search Filter
//!
//! Turns categories plus a search term into the rows to display.

use crate::models::{item_key, Category};

/// One visible item row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub key: String,
    pub label: String,
}

/// A category header with its matching rows (possibly none)
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub rows: Vec<ItemRow>,
}

/// Case-insensitive substring match on item labels.
/// Every category is returned, even when no item matches.
pub fn visible_items(categories: &[Category], search: &str) -> Vec<CategoryView> {
    let needle = search.to_lowercase();
    categories
        .iter()
        .map(|cat| CategoryView {
            name: cat.name.clone(),
            rows: cat
                .items
                .iter()
                .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
                .map(|item| ItemRow {
                    key: item_key(&cat.name, item),
                    label: item.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Safety", &["Helmet", "Gloves"]),
            Category::new("Tools", &["Hammer", "Saw"]),
        ]
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let views = visible_items(&categories(), "");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].rows.len(), 2);
        assert_eq!(views[0].rows[0].key, "Safety_Helmet");
        assert_eq!(views[1].rows[1].label, "Saw");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let views = visible_items(&categories(), "HEL");
        assert_eq!(views[0].rows, vec![ItemRow { key: "Safety_Helmet".into(), label: "Helmet".into() }]);
        assert!(views[1].rows.is_empty());
    }

    #[test]
    fn test_whitespace_is_matched_literally() {
        let cats = vec![Category::new("Safety", &["Safety glasses", "Gloves"])];
        let views = visible_items(&cats, " ");
        assert_eq!(views[0].rows.len(), 1);
        assert_eq!(views[0].rows[0].label, "Safety glasses");

        let views = visible_items(&cats, "GLASSES ");
        assert!(views[0].rows.is_empty());
    }

    #[test]
    fn test_no_match_keeps_headers() {
        let views = visible_items(&categories(), "xyz");
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Safety", "Tools"]);
        assert!(views.iter().all(|v| v.rows.is_empty()));
    }
}
