//! Tab management module
//!
//! Содержит:
//! - `strip` - полоса вкладок (кнопки с иконками)
//! - `page` - обёртка панели: скрытие неактивной или lazy-монтирование
//! - `registry` - маппинг View → панель (единственный источник правды)

pub mod page;
pub mod registry;
pub mod strip;

pub use page::TabPage;
pub use strip::TabStrip;
