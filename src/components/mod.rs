pub mod app_layout;
pub mod empty_state;
pub mod icon;
pub mod sidebar;
pub mod toast;

pub use app_layout::AppLayout;
pub use empty_state::EmptyState;
pub use icon::Icon;
pub use sidebar::Sidebar;
pub use toast::{provide_toasts, use_toast, ToastContainer};
