pub mod clipboard;
pub mod hotkey;
