use crate::app::state::{AppMode, AppState, Page, WidgetId};
use crate::components::{
    alert::Alerts, badge::BadgeGallery, checkbox::CheckboxGroup, combobox::ComboboxView,
    footer::Footer, header::Header, modals::HelpModal, overview::Overview, panel,
    progress::ProgressBar, radio::RadioGroup, sidebar::Sidebar, switch::Switches,
    tabs::TabPanel, text_input::EmailField,
};
use crate::domain::combobox::SelectionMode;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main[1]);

    AppLayout {
        header: main[0],
        sidebar: body[0],
        content: body[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let focused = app_state.focused_widget();

    // --- Header ---
    if layout.header.height > 0 {
        let header = Header {
            page: app_state.page,
            focused: focused.map(|id| id.label()),
            theme: &app_state.theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Sidebar ---
    if layout.sidebar.width > 0 && layout.sidebar.height > 0 {
        let sidebar = Sidebar {
            active: app_state.page,
            theme: &app_state.theme,
        };
        f.render_widget(sidebar, layout.sidebar);
    }

    // --- Page ---
    if layout.content.width > 0 && layout.content.height > 0 {
        let block = panel(app_state.page.title(), focused.is_some(), &app_state.theme);
        let inner = block.inner(layout.content);
        f.render_widget(block, layout.content);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        f.render_widget(
            Paragraph::new(Span::styled(app_state.page.summary(), app_state.theme.dimmed)),
            chunks[0],
        );
        draw_page(f, app_state, focused, chunks[1]);
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        let footer = Footer {
            state: app_state,
            theme: &app_state.theme,
        };
        f.render_widget(footer, layout.footer);
    }

    if app_state.mode == AppMode::Help {
        f.render_widget(
            HelpModal {
                theme: &app_state.theme,
            },
            f.area(),
        );
    }
}

fn draw_page(f: &mut Frame, app_state: &mut AppState, focused: Option<WidgetId>, area: Rect) {
    let theme = &app_state.theme;
    let playground = &mut app_state.playground;
    let is = |id| focused == Some(id);

    match app_state.page {
        Page::Overview => f.render_widget(Overview { theme }, area),
        Page::Badges => f.render_widget(BadgeGallery { theme }, area),
        Page::Checkbox => f.render_widget(
            CheckboxGroup {
                group: &playground.notifications,
                focused: is(WidgetId::Notifications),
                theme,
            },
            area,
        ),
        Page::Radio => f.render_widget(
            RadioGroup {
                group: &playground.plan,
                focused: is(WidgetId::Plan),
                theme,
            },
            area,
        ),
        Page::Switch => f.render_widget(
            Switches {
                bank: &playground.switches,
                focused: is(WidgetId::Switches),
                theme,
            },
            area,
        ),
        Page::Tabs => f.render_widget(
            TabPanel {
                tabs: &playground.settings_tabs,
                focused: is(WidgetId::SettingsTabs),
                theme,
            },
            area,
        ),
        Page::Progress => f.render_widget(
            ProgressBar {
                progress: &playground.upload,
                theme,
            },
            area,
        ),
        Page::TextInput => f.render_widget(
            EmailField {
                input: &mut playground.email,
                focused: is(WidgetId::Email),
                theme,
            },
            area,
        ),
        Page::Alerts => f.render_widget(
            Alerts {
                stack: &playground.alerts,
                focused: is(WidgetId::Alerts),
                theme,
            },
            area,
        ),
        Page::Combobox => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(area);

            let readout = Line::from(vec![
                Span::styled("country ", theme.dimmed),
                Span::styled(
                    playground.country.selected().first().map_or("none", String::as_str),
                    theme.text,
                ),
                Span::styled("   frameworks ", theme.dimmed),
                Span::styled(playground.frameworks.selected().join(", "), theme.text),
            ]);
            f.render_widget(Paragraph::new(readout), chunks[0]);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(50),
                    Constraint::Length(2),
                    Constraint::Percentage(50),
                ])
                .split(chunks[1]);

            for (id, column, label, placeholder) in [
                (WidgetId::CountryPicker, columns[0], "Country", "Search countries"),
                (WidgetId::FrameworkPicker, columns[2], "Frameworks", "Search frameworks"),
            ] {
                let Some(combo) = playground.combobox_mut(id) else {
                    continue;
                };
                let label = match combo.mode() {
                    SelectionMode::Single => label.to_string(),
                    SelectionMode::Multi => format!("{label} ({} selected)", combo.selected().len()),
                };
                let view = ComboboxView {
                    label: &label,
                    placeholder,
                    focused: is(id),
                    theme,
                };
                f.render_stateful_widget(view, column, combo);
            }
        }
    }
}
