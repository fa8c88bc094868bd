pub mod help;
pub mod helpers;

pub use help::HelpModal;
