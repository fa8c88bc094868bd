/// Every interactive demo on every page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetId {
    CountryPicker,
    FrameworkPicker,
    Notifications,
    Plan,
    Switches,
    SettingsTabs,
    Upload,
    Email,
    Alerts,
}

impl WidgetId {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            WidgetId::CountryPicker => "country",
            WidgetId::FrameworkPicker => "frameworks",
            WidgetId::Notifications => "notifications",
            WidgetId::Plan => "plan",
            WidgetId::Switches => "switches",
            WidgetId::SettingsTabs => "settings-tabs",
            WidgetId::Upload => "upload",
            WidgetId::Email => "email",
            WidgetId::Alerts => "alerts",
        }
    }

    #[must_use]
    pub fn is_combobox(&self) -> bool {
        matches!(self, WidgetId::CountryPicker | WidgetId::FrameworkPicker)
    }

    /// Widgets that consume printable keys themselves.
    #[must_use]
    pub fn captures_text(&self) -> bool {
        self.is_combobox() || *self == WidgetId::Email
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    Badges,
    Checkbox,
    Radio,
    Switch,
    Tabs,
    Combobox,
    Progress,
    TextInput,
    Alerts,
}

impl Page {
    #[must_use]
    pub fn all() -> &'static [Page] {
        &[
            Page::Overview,
            Page::Badges,
            Page::Checkbox,
            Page::Radio,
            Page::Switch,
            Page::Tabs,
            Page::Combobox,
            Page::Progress,
            Page::TextInput,
            Page::Alerts,
        ]
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Badges => "Badges & Avatars",
            Page::Checkbox => "Checkbox",
            Page::Radio => "Radio",
            Page::Switch => "Switch",
            Page::Tabs => "Tabs",
            Page::Combobox => "Combobox",
            Page::Progress => "Progress",
            Page::TextInput => "Text Input",
            Page::Alerts => "Alerts",
        }
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            Page::Overview => "Components of the design system, one page each.",
            Page::Badges => "Status labels and initials avatars.",
            Page::Checkbox => "Independent choices with a derived select-all parent.",
            Page::Radio => "One choice out of a small set.",
            Page::Switch => "Immediate on/off settings.",
            Page::Tabs => "Switch between related panels.",
            Page::Combobox => "Type to filter, then pick one or many.",
            Page::Progress => "Report how far along a task is.",
            Page::TextInput => "Single-line entry with validation feedback.",
            Page::Alerts => "Dismissable messages by severity.",
        }
    }

    /// Focus order of the page's interactive demos.
    #[must_use]
    pub fn widgets(&self) -> &'static [WidgetId] {
        match self {
            Page::Overview | Page::Badges => &[],
            Page::Checkbox => &[WidgetId::Notifications],
            Page::Radio => &[WidgetId::Plan],
            Page::Switch => &[WidgetId::Switches],
            Page::Tabs => &[WidgetId::SettingsTabs],
            Page::Combobox => &[WidgetId::CountryPicker, WidgetId::FrameworkPicker],
            Page::Progress => &[WidgetId::Upload],
            Page::TextInput => &[WidgetId::Email],
            Page::Alerts => &[WidgetId::Alerts],
        }
    }

    pub fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(&self) -> Page {
        let all = Page::all();
        all[(self.index() + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(&self) -> Page {
        let all = Page::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Overview.prev(), Page::Alerts);
        assert_eq!(Page::Alerts.next(), Page::Overview);
        assert_eq!(Page::Tabs.next(), Page::Combobox);
    }

    #[test]
    fn test_text_capture() {
        assert!(WidgetId::CountryPicker.captures_text());
        assert!(WidgetId::Email.captures_text());
        assert!(!WidgetId::Plan.captures_text());
    }
}
