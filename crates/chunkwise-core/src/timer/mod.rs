mod clock;
mod countdown;
mod format;
mod progress;
mod session;
mod view;

pub use clock::{Clock, Fired, SimulatedClock, TimerHandle, TokioClock, Trigger};
pub use countdown::{Countdown, CountdownPhase, CountdownState};
pub use format::format_clock;
pub use progress::ProgressAnimation;
pub use session::CountdownSession;
pub use view::{Accent, CountdownView, TIME_UP};
