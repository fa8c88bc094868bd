pub mod combobox;
pub mod navigation;
pub mod ui;
pub mod widgets;
