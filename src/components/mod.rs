//! UI Components
//!
//! Reusable Leptos components.

mod popup;
mod login_popup;
mod app_header;
mod profile_editor;
mod checklist_view;
mod checklist_item;
mod comment_popup;
mod reply_popup;

pub use popup::Popup;
pub use login_popup::LoginPopup;
pub use app_header::AppHeader;
pub use profile_editor::ProfileEditor;
pub use checklist_view::ChecklistView;
pub use checklist_item::ChecklistItem;
pub use comment_popup::CommentPopup;
pub use reply_popup::ReplyPopup;
