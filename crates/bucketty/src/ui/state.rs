//! UI-facing state types shared between rendering and key handling.

pub mod app_mode;
