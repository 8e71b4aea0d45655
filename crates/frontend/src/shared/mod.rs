pub mod api_utils;
pub mod chunk_loader;
pub mod external_icon;
pub mod icons;
