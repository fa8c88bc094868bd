use super::config::Config;
use super::keymap::KeyMap;
use crate::domain::alert::{Alert, AlertStack, Severity};
use crate::domain::catalog;
use crate::domain::checkbox::CheckGroup;
use crate::domain::combobox::{Combobox, SelectionChange, SelectionMode};
use crate::domain::pointer::PointerHub;
use crate::domain::progress::Progress;
use crate::domain::radio::{RadioChoice, RadioGroup};
use crate::domain::switch::{Switch, SwitchBank};
use crate::domain::tabs::TabSet;
use chrono::{DateTime, Local};
use std::sync::Arc;

pub mod input;
pub mod page;

// Re-exports
pub use input::{AppTextArea, InputState, Validation};
pub use page::{Page, WidgetId};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal, // Browsing pages and demos
    Help,   // Showing the help overlay
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry {
    pub source: WidgetId,
    pub change: SelectionChange,
    pub timestamp: DateTime<Local>,
}

/// Live state of every demo. Each widget owns its state exclusively.
#[derive(Debug)]
pub struct Playground<'a> {
    pub country: Combobox,
    pub frameworks: Combobox,
    pub notifications: CheckGroup,
    pub plan: RadioGroup,
    pub switches: SwitchBank,
    pub settings_tabs: TabSet,
    pub upload: Progress,
    pub email: InputState<'a>,
    pub alerts: AlertStack,
}

impl Playground<'_> {
    pub fn new(hub: &PointerHub, max_visible: usize) -> Self {
        Self {
            country: Combobox::new(catalog::countries(), SelectionMode::Single, hub.clone())
                .with_max_visible(max_visible),
            frameworks: Combobox::new(catalog::frameworks(), SelectionMode::Multi, hub.clone())
                .with_selected(["axum"])
                .with_max_visible(max_visible),
            notifications: CheckGroup::new(
                "All notifications",
                &[("Email", true), ("SMS", false), ("Push", false)],
            ),
            plan: RadioGroup::new(
                vec![
                    radio_choice("Starter", "Up to 3 projects", false),
                    radio_choice("Pro", "Unlimited projects", false),
                    radio_choice("Enterprise", "Contact sales", true),
                ],
                0,
            ),
            switches: SwitchBank::new(vec![
                Switch::new("Wi-Fi", true),
                Switch::new("Bluetooth", false),
                Switch::new("Airplane mode", false),
                Switch::new("Managed by admin", true).disabled(),
            ]),
            settings_tabs: TabSet::new(["Account", "Password", "Notifications"]),
            upload: Progress::default(),
            email: InputState::default(),
            alerts: AlertStack::new(default_alerts()),
        }
    }

    pub fn combobox(&self, id: WidgetId) -> Option<&Combobox> {
        match id {
            WidgetId::CountryPicker => Some(&self.country),
            WidgetId::FrameworkPicker => Some(&self.frameworks),
            _ => None,
        }
    }

    pub fn combobox_mut(&mut self, id: WidgetId) -> Option<&mut Combobox> {
        match id {
            WidgetId::CountryPicker => Some(&mut self.country),
            WidgetId::FrameworkPicker => Some(&mut self.frameworks),
            _ => None,
        }
    }

    pub fn comboboxes_mut(&mut self) -> [(WidgetId, &mut Combobox); 2] {
        [
            (WidgetId::CountryPicker, &mut self.country),
            (WidgetId::FrameworkPicker, &mut self.frameworks),
        ]
    }
}

fn radio_choice(label: &str, hint: &str, disabled: bool) -> RadioChoice {
    RadioChoice {
        label: label.to_string(),
        hint: hint.to_string(),
        disabled,
    }
}

pub fn default_alerts() -> Vec<Alert> {
    vec![
        Alert::new(Severity::Info, "Heads up", "A new version of the kit is available."),
        Alert::new(Severity::Success, "Saved", "Your changes have been published."),
        Alert::new(Severity::Warning, "Quota", "You have used 90% of your storage."),
        Alert::new(Severity::Error, "Payment failed", "Update your billing details."),
    ]
}

#[derive(Debug)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub status_message: Option<String>,
    pub last_change: Option<ChangeEntry>,

    // --- Navigation ---
    pub page: Page,
    pub focus: usize, // Index into page.widgets()

    // --- Widgets ---
    pub pointer_hub: PointerHub,
    pub playground: Playground<'a>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let keymap = KeyMap::from_config(&config.keys).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring custom key bindings");
            KeyMap::default()
        });
        let pointer_hub = PointerHub::new();
        Self {
            playground: Playground::new(&pointer_hub, config.combobox.max_visible),
            pointer_hub,
            keymap: Arc::new(keymap),
            ..Default::default()
        }
    }

    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.page.widgets().get(self.focus).copied()
    }

    pub fn record_change(&mut self, source: WidgetId, change: SelectionChange) {
        self.last_change = Some(ChangeEntry {
            source,
            change,
            timestamp: Local::now(),
        });
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let pointer_hub = PointerHub::new();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            status_message: None,
            last_change: None,
            page: Page::Overview,
            focus: 0,
            playground: Playground::new(&pointer_hub, super::config::DEFAULT_MAX_VISIBLE),
            pointer_hub,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
        }
    }
}
