pub mod card_tracker;
pub mod progress;
pub mod section_driver;
pub mod smooth;

pub use card_tracker::{CardTracker, intersection_ratio, most_visible};
pub use progress::scroll_progress;
pub use section_driver::{SectionThemeDriver, probe_y, section_at_probe};
pub use smooth::{ScrollAnimation, SmoothScroller, ease_in_out_cubic, scroll_target};
