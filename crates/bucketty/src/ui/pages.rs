//! Full-screen UI page modules.

pub mod browser;
pub mod editor;
pub mod logs;
