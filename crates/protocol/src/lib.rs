pub mod commands;
pub mod shared_str;
pub mod theme;
pub mod trace;
pub mod types;

pub use commands::ViewCommand;
pub use shared_str::SharedStr;
pub use theme::{PageSectionTheme, ProjectCategoryTheme, ThemeToken};
pub use trace::{TraceKind, TraceLine, TraceStatus};
pub use types::{CardBox, Rect, SectionBox, Viewport};
