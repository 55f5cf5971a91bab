//! tabdock - docking layout engine for tabbed panes
//!
//! Panes live in tab groups, tab groups sit in a binary tree of splits, and
//! dragging a tab onto a group's edge or center rearranges the tree. The
//! crate follows the Elm Architecture pattern: feed `Msg` values to
//! `update::update`, perform the returned `Cmd`.

pub mod commands;
pub mod config;
pub mod config_paths;
#[cfg(feature = "winit")]
pub mod input;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use messages::Msg;
pub use model::{DockHost, DockLayout, LayoutModel, Pane};
pub use view::DropZone;
