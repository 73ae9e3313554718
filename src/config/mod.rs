//! Configuration module

mod site;

pub use site::ColorMode;
pub use site::ColorModeConfig;
pub use site::LogoConfig;
pub use site::NavItem;
pub use site::NavPosition;
pub use site::NavbarConfig;
pub use site::SearchConfig;
pub use site::SiteConfig;
