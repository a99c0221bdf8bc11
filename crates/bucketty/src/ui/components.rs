//! Reusable UI building blocks rendered inside pages and overlays.

pub mod confirmation_overlay;
pub mod create_folder_overlay;
pub mod footer_bar;
pub mod help_overlay;
pub mod status_bar;
pub mod upload_overlay;
pub mod versions_overlay;
