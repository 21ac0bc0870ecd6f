pub mod session;
pub mod site;

pub use session::{BrowserConfig, BrowserKind, new_session};
pub use site::SiteDriver;
