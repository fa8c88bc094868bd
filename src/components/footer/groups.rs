use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, WidgetId};

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.mode == AppMode::Help {
        return vec![FooterGroup {
            name: "HELP",
            items: vec![item("q/Esc/?", "close")],
        }];
    }

    let mut groups = Vec::new();

    match state.focused_widget() {
        Some(id) if id.is_combobox() => {
            let open = state
                .playground
                .combobox(id)
                .is_some_and(|c| c.is_open());
            groups.push(FooterGroup {
                name: "PICK",
                items: vec![
                    item("type", "filter"),
                    item("↑/↓", "move"),
                    FooterItem {
                        key: "Enter",
                        desc: "select",
                        highlighted: open,
                    },
                    item("Esc", "close"),
                ],
            });
        }
        Some(WidgetId::Email) => groups.push(FooterGroup {
            name: "INPUT",
            items: vec![item("type", "edit"), item("Esc", "leave")],
        }),
        Some(WidgetId::Upload) => groups.push(FooterGroup {
            name: "PROGRESS",
            items: vec![
                item("Space", "start/pause"),
                item("+/-", "step"),
                item("r", "reset"),
            ],
        }),
        Some(WidgetId::Alerts) => groups.push(FooterGroup {
            name: "ALERTS",
            items: vec![
                item("j/k", "move"),
                item("Enter", "dismiss"),
                item("r", "restore"),
            ],
        }),
        Some(WidgetId::SettingsTabs) => groups.push(FooterGroup {
            name: "TABS",
            items: vec![item("h/l", "switch")],
        }),
        Some(_) => groups.push(FooterGroup {
            name: "WIDGET",
            items: vec![item("j/k", "move"), item("Space", "toggle")],
        }),
        None => {}
    }

    groups.push(FooterGroup {
        name: "NAV",
        items: vec![
            item("Tab", "focus"),
            item("PgUp/Dn", "page"),
            item("F1", "help"),
        ],
    });
    groups.push(FooterGroup {
        name: "APP",
        items: vec![item("Ctrl+C", "quit")],
    });
    groups
}
