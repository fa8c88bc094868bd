pub const LOGO: &str = "◆";
pub const SEP_RIGHT: &str = "";
pub const POINTER: &str = "›";
pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const INDETERMINATE: &str = "[-]";
pub const RADIO_ON: &str = "(•)";
pub const RADIO_OFF: &str = "( )";
pub const SWITCH_ON: &str = "━━●";
pub const SWITCH_OFF: &str = "●━━";
pub const CHIP_CLOSE: &str = "×";
pub const CARET_DOWN: &str = "▾";
pub const CARET_UP: &str = "▴";
pub const TICK: &str = "✓";
