pub mod analysis_tool;
pub mod bot_builder;
pub mod chart;
pub mod dashboard;
pub mod free_bots;
pub mod run_panel;
pub mod tutorials;
