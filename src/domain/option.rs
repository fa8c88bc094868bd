/// One selectable entry of a combobox.
///
/// `value` identifies the option and must be unique within its list. Every other
/// field is for display; `description` and `category` also take part in search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub marker: Option<String>,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            category: None,
            marker: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str())
            .chain(self.description.as_deref())
            .chain(self.category.as_deref())
    }

    /// `needle` must already be lowercased. An empty needle matches everything.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .searchable_fields()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_searchable_field() {
        let opt = SelectOption::new("rs", "Rust")
            .with_description("Systems language")
            .with_category("Compiled");

        assert!(opt.matches("rust"));
        assert!(opt.matches("systems"));
        assert!(opt.matches("compiled"));
        assert!(!opt.matches("python"));
    }

    #[test]
    fn test_marker_is_not_searched() {
        let opt = SelectOption::new("fr", "France").with_marker("*");
        assert!(!opt.matches("*"));
        assert!(opt.matches("fra"));
    }
}
