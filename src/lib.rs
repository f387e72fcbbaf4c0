//! Travel helper library: unit and currency conversion, translation, expense
//! tracking and country notes, shared by the CLI and the GUI.

pub mod app;
pub mod config;
pub mod conversion;
pub mod country;
pub mod expense;
pub mod logging;
pub mod navigation;
pub mod translate;
pub mod ui_cli;
pub mod units;
