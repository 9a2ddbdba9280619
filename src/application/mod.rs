pub mod capture;
pub mod control;
pub mod dispatch;
pub mod gesture;
