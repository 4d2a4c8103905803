//! Domain model for the board.
//!
//! The board domain models columns, tasks, filtering, due checks, and the
//! closed command set that transforms them, while keeping persistence and
//! presentation concerns outside the domain boundary.

mod column;
mod command;
mod due;
mod error;
mod filter;
mod ids;
mod state;
mod store;
mod task;
mod theme;

pub use column::Column;
pub use command::{Applied, Command, MoveTask};
pub use due::{DueStatus, due_status, is_due_today, is_overdue};
pub use error::{BoardError, BoardErrorKind, BoardResult};
pub use filter::{matches_filters, matches_search, matches_tag};
pub use ids::{ColumnId, TaskId};
pub use state::BoardState;
pub use store::BoardStore;
pub use task::{Task, TaskDraft, TaskPatch, parse_tag_list};
pub use theme::{ParseThemeError, Theme};
