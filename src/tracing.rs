//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag sessions and tree mutations.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=debug,tree=trace` - scoped filtering
//! - `RUST_LOG=tabdock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tabdock/logs/tabdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::layout::{DockLayout, LayoutNode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var (default `warn`).
/// File logging writes to `~/.config/tabdock/logs/tabdock.log` with daily rotation.
///
/// Meant to be called once by the embedding application; a second call panics
/// like any other global subscriber installation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Shape of the root node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Empty,
    Group,
    Split,
}

/// Lightweight snapshot of tree shape for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    pub root: RootKind,
    pub group_count: usize,
    pub split_count: usize,
    pub pane_count: usize,
    /// (group, tab count, selected tab index) in tree order
    pub groups: Vec<(u64, usize, Option<usize>)>,
}

impl TreeSnapshot {
    pub fn from_layout<C>(layout: &DockLayout<C>) -> Self {
        let root = match &layout.root {
            None => RootKind::Empty,
            Some(LayoutNode::Group(_)) => RootKind::Group,
            Some(LayoutNode::Split(_)) => RootKind::Split,
        };

        let groups = layout
            .collect_group_ids()
            .into_iter()
            .filter_map(|id| layout.group(id))
            .map(|g| {
                let selected = g.selected.and_then(|p| g.index_of(p));
                (g.id.0, g.len(), selected)
            })
            .collect();

        Self {
            root,
            group_count: layout.groups.len(),
            split_count: layout.split_count(),
            pane_count: layout.panes.len(),
            groups,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &TreeSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.root != other.root {
            changes.push(format!("root: {:?} → {:?}", self.root, other.root));
        }
        if self.group_count != other.group_count {
            changes.push(format!(
                "groups: {} → {}",
                self.group_count, other.group_count
            ));
        }
        if self.split_count != other.split_count {
            changes.push(format!(
                "splits: {} → {}",
                self.split_count, other.split_count
            ));
        }
        if self.pane_count != other.pane_count {
            changes.push(format!("panes: {} → {}", self.pane_count, other.pane_count));
        }
        if changes.is_empty() && self.groups != other.groups {
            changes.push("tabs or selection changed".to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
