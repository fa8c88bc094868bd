use crate::app::{
    action::Action,
    command::Command,
    input::map_event_to_action,
    reducer,
    sink::SelectionSink,
    state::{AppMode, AppState},
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    sink: Arc<dyn SelectionSink>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, sink, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    sink: Arc<dyn SelectionSink>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let mut interval = interval(TICK_RATE);
    tracing::info!(page = app_state.page.title(), "event loop started");

    'main: loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let actions = tokio::select! {
            _ = interval.tick() => vec![Action::Tick],

            // User Input
            res = event_rx.recv() => {
                let Some(res) = res else {
                    tracing::debug!("input channel closed");
                    break 'main;
                };
                let event = res?;
                let mut actions = Vec::with_capacity(2);
                // Outside-click listeners see every left press before the click itself
                if let Event::Mouse(mouse) = &event {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                        && app_state.mode != AppMode::Help
                    {
                        actions.push(Action::PointerDown(mouse.column, mouse.row));
                    }
                }
                let size = terminal.size()?;
                actions.extend(map_event_to_action(event, &app_state, size));
                actions
            },
        };

        // --- 3. Update (Reducer) ---
        for action in actions {
            if let Action::Quit = action {
                app_state.should_quit = true;
                break;
            }

            if let Some(cmd) = reducer::update(&mut app_state, action) {
                handle_command(cmd, sink.as_ref());
            }
        }

        if app_state.should_quit {
            break;
        }
    }

    tracing::info!("event loop stopped");
    Ok(())
}

pub(crate) fn handle_command(command: Command, sink: &dyn SelectionSink) {
    match command {
        Command::NotifySelection(source, change) => sink.selection_changed(source, &change),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
