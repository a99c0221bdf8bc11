//! `AppMode`-specific key handling modules.

pub(crate) mod browser;
pub(crate) mod confirmation;
pub(crate) mod create_folder;
pub(crate) mod delete_confirmation;
pub(crate) mod editor;
pub(crate) mod help;
pub(crate) mod logs;
pub(crate) mod restore_confirmation;
pub(crate) mod upload;
pub(crate) mod versions;
