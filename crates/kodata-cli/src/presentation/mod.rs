//! # Presentation Layer
//!
//! MVVM adapted to a terminal: handlers act as page controllers, presenters turn
//! loaded pages into view models, and renderers print them (JSON or text) or drive
//! the interactive dashboard.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (controller)     (mapping)          (data)          (driver)   ==(Text)==> [ View ]
//! ```
//!
//! ## Rules
//!
//! * View models are plain data and implement `Serialize`. Counts stay numeric;
//!   strings that are part of the display contract (card body, badge labels,
//!   fallback messages) are produced by presenters in the active locale.
//! * `ViewMode` controls density only. `--format json` ignores it and always emits
//!   the full view model.
//! * TUI components own UI state (selection, scroll, text input). Anything that
//!   changes page state goes up to the controller as an action.
//! * `formatters/` holds the string helpers (truncation, thousands separators,
//!   signed deltas) shared by presenters and views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Dashboard, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, OutputFormat, StatusBadge, StatusLevel,
    ViewMode,
};
