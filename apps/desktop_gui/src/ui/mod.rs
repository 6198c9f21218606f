//! UI layer for the desktop GUI: the catalog page shell and widgets.

pub mod app;

pub use app::HeroCatalogApp;
