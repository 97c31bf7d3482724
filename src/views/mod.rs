//! Pure-render views. Views hold their last area for hit-testing only;
//! all state they draw comes in by reference from the kernel.

pub mod accounts;
pub mod offsets;
pub mod prompt;
pub mod sidebar;

pub use accounts::AccountsView;
pub use offsets::OffsetsView;
pub use sidebar::SidebarView;
