//! Leptos UI components

mod empty_state;
mod flowchart;
mod node_detail_modal;
mod review_section;
mod star_rating;
mod step_checklist;
mod toast;

pub use empty_state::EmptyState;
pub use flowchart::FlowchartCanvas;
pub use node_detail_modal::NodeDetailModal;
pub use review_section::ReviewSection;
pub use star_rating::{StarRating, StaticStars};
pub use step_checklist::StepChecklist;
pub use toast::{use_toast, ToastProvider};
