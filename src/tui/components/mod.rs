//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: counts, compare progress, status
//! - `FilterBar`: category/price/sort chips, search box, featured strip
//! - `Compare`: side-by-side comparison overlay
//! - `Toast`: transient notice
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose persistent state lives in `TuiState` and which are
//! wrapped each frame:
//! - `ToolList` / `ToolListState`: the browsable list
//! - `Detail` / `DetailState`: scrollable record view
//! - `FavoritesPanel` / `FavoritesPanelState`: favorites overlay
//!
//! Components receive external data as props, never by reaching into
//! `App` themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! FilterBar { filter: &app.filter, searching, featured: &featured }.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! filter_bar.render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── layout.rs           (centered_rect, truncate_str)
//! ├── title_bar.rs
//! ├── filter_bar.rs
//! ├── tool_list.rs
//! ├── detail.rs
//! ├── compare.rs
//! ├── favorites_panel.rs
//! └── toast.rs
//! ```

pub mod compare;
pub mod detail;
pub mod favorites_panel;
pub mod filter_bar;
pub mod layout;
pub mod title_bar;
pub mod toast;
pub mod tool_list;

pub use compare::{Compare, CompareEvent};
pub use detail::{Detail, DetailEvent, DetailState};
pub use favorites_panel::{FavoritesEvent, FavoritesPanel, FavoritesPanelState};
pub use filter_bar::{FilterBar, filter_bar_height};
pub use title_bar::TitleBar;
pub use toast::Toast;
pub use tool_list::{ToolList, ToolListState};
