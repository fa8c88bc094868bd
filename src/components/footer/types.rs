/// A key hint; `highlighted` marks the key that does something useful right now.
#[derive(Debug, Clone, Copy)]
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}
