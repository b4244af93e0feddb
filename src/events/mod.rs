pub mod downloads;
pub mod faq;
pub mod nav;
pub mod pointer;
pub mod scroll;

pub use downloads::wire_downloads;
pub use faq::wire_faq;
pub use nav::{wire_anchor_scroll, wire_mobile_menu};
pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use scroll::{wire_feature_line, wire_navbar};
