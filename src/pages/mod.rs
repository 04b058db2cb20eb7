//! Routed Pages

mod dashboard;
mod dashboard_layout;
mod edit_task;
mod login;
mod manage_tasks;
mod not_found;
mod profile;
mod signup;

pub use dashboard::DashboardPage;
pub use dashboard_layout::DashboardLayout;
pub use edit_task::EditTaskPage;
pub use login::LoginPage;
pub use manage_tasks::ManageTasksPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;
