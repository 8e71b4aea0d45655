//! Общие типы для frontend и backend.
//!
//! - `shell` - перечень вкладок, конфигурация оболочки и роутер по URL-фрагменту
//! - `header` - статические таблицы внешних ссылок и иконок для шапки

pub mod header;
pub mod shell;
