pub mod animator;
pub mod clock;
pub mod ids;
pub mod machine;
pub mod scenario;

pub use animator::TraceAnimator;
pub use clock::{FixedClock, LocalClock, TraceClock};
pub use ids::{FallbackLineIds, LineIds, SequentialLineIds, UuidLineIds};
pub use scenario::{COMPLETION_MARKER, Scenario, ScenarioBank};
