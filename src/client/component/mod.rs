pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod preview;
pub mod protected_layout;
pub mod toast;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use preview::MessagePreview;
pub use protected_layout::RequiresLoggedIn;
pub use toast::Toaster;
