pub mod country_selector;
pub mod download_card;
pub mod footer;
pub mod navbar;
pub mod route_link;
pub mod sidebar;

pub use country_selector::CountrySelector;
pub use download_card::DownloadCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use route_link::RouteLink;
pub use sidebar::{LoginBox, RequirementsCard, ServerInfo, SidebarCard, TopPlayers};
