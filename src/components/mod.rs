//! UI Components
//!
//! Reusable Leptos components for the task manager.

mod delete_confirm_dialog;
mod filter_tabs;
mod require_session;
mod sidebar;
mod summary_cards;
mod task_board_view;
mod task_card;
mod task_modal;

pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use filter_tabs::FilterTabs;
pub use require_session::RequireSession;
pub use sidebar::Sidebar;
pub use summary_cards::SummaryCards;
pub use task_board_view::TaskBoardView;
pub use task_card::TaskCard;
pub use task_modal::TaskModalForm;
