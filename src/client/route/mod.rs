pub mod builder;
pub mod community;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod servers;

pub use builder::{Builder, EditBuilder, TemplateBuilder};
pub use community::Community;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use servers::Servers;
