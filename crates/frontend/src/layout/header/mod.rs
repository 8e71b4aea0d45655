pub mod header;
pub mod platform_switcher;

pub use header::Header;
pub use platform_switcher::PlatformSwitcher;
