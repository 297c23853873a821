pub mod app;
pub mod brand;
pub mod carousel;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod i18n;
pub mod insights;
pub mod preferences;
pub mod theme;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::AppConfig;
pub use error::{BizEdgeError, Result};
