//! Page category constants for page standardization.
//!
//! Every routed page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a025_product--detail"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a025_product/` directory.

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Build a page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a025_product", PAGE_CAT_DETAIL), "a025_product--detail");
        assert_eq!(page_id("a025_product", PAGE_CAT_LIST), "a025_product--list");
    }
}
