pub mod alert;
pub mod avatar;
pub mod catalog;
pub mod checkbox;
pub mod combobox;
pub mod option;
pub mod pointer;
pub mod progress;
pub mod radio;
pub mod switch;
pub mod tabs;
