#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub dismissed: bool,
}

impl Alert {
    pub fn new(severity: Severity, title: &str, message: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            dismissed: false,
        }
    }
}

/// Dismissable alerts. The cursor indexes the *visible* (not dismissed) alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertStack {
    pub alerts: Vec<Alert>,
    pub cursor: usize,
}

impl AlertStack {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts, cursor: 0 }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.dismissed)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn next(&mut self) {
        let n = self.visible_count();
        if n > 0 {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.visible_count();
        if n > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(n - 1);
        }
    }

    pub fn dismiss_focused(&mut self) {
        if let Some(alert) = self
            .alerts
            .iter_mut()
            .filter(|a| !a.dismissed)
            .nth(self.cursor)
        {
            alert.dismissed = true;
        }
        self.cursor = self.cursor.min(self.visible_count().saturating_sub(1));
    }

    pub fn restore_all(&mut self) {
        for alert in &mut self.alerts {
            alert.dismissed = false;
        }
    }
}
