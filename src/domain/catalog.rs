//! Option sets shown by the playground's demos.

use super::option::SelectOption;

pub fn countries() -> Vec<SelectOption> {
    [
        ("us", "United States", "US", "North America"),
        ("ca", "Canada", "CA", "North America"),
        ("mx", "Mexico", "MX", "North America"),
        ("br", "Brazil", "BR", "South America"),
        ("gb", "United Kingdom", "GB", "Europe"),
        ("fr", "France", "FR", "Europe"),
        ("de", "Germany", "DE", "Europe"),
        ("jp", "Japan", "JP", "Asia"),
        ("in", "India", "IN", "Asia"),
        ("au", "Australia", "AU", "Oceania"),
    ]
    .into_iter()
    .map(|(value, label, marker, region)| {
        SelectOption::new(value, label)
            .with_marker(marker)
            .with_category(region)
    })
    .collect()
}

pub fn frameworks() -> Vec<SelectOption> {
    vec![
        SelectOption::new("react", "React")
            .with_category("Frontend")
            .with_description("Component library"),
        SelectOption::new("vue", "Vue")
            .with_category("Frontend")
            .with_description("Progressive framework"),
        SelectOption::new("svelte", "Svelte")
            .with_category("Frontend")
            .with_description("Compiler-first UI"),
        SelectOption::new("axum", "Axum")
            .with_category("Backend")
            .with_description("Rust web framework"),
        SelectOption::new("django", "Django")
            .with_category("Backend")
            .with_description("Batteries-included Python"),
        SelectOption::new("rails", "Rails")
            .with_category("Backend")
            .with_description("Ruby web framework"),
        SelectOption::new("ember", "Ember")
            .with_category("Frontend")
            .with_description("Deprecated in this workspace")
            .disabled(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_values_are_unique() {
        for set in [countries(), frameworks()] {
            let unique: HashSet<_> = set.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(unique.len(), set.len());
        }
    }
}
