pub mod config;
pub mod router;
pub mod view;

pub use config::{ShellConfig, ShellConfigError};
pub use router::{NavigationState, TabRouter, Transition};
pub use view::View;
