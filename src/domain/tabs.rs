#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    pub titles: Vec<String>,
    pub active: usize,
}

impl TabSet {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.titles.is_empty() {
            self.active = (self.active + 1) % self.titles.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.titles.is_empty() {
            self.active = self.active.checked_sub(1).unwrap_or(self.titles.len() - 1);
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.active = index;
        }
    }
}
