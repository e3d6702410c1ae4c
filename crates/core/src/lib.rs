//! Core of folio: scroll-driven page theming, the simulated trace panel,
//! and the static site data, all driven by a host through [`Portfolio`].

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod scheduler;
pub mod scroll;
pub mod session;
pub mod theme_store;
pub mod trace;

pub use config::FolioConfig;
pub use error::{BankError, ConfigError, FolioError, LayoutError};
pub use layout::{LayoutProbe, LayoutSnapshot};
pub use scheduler::{PageTimer, Scheduler, TimerId};
pub use session::Portfolio;
pub use theme_store::{ThemeReader, ThemeWriter, theme_channel};
