pub mod shell;
pub mod theme;
