//! CPU scheduling domain models.
//!
//! Provides the input and output value types of a simulation run. Inputs
//! are read-only for the duration of a run; outputs are freshly built on
//! every call.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Input record per process |
//! | `Algorithm` | Discipline selector |
//! | `ScheduleEntry` | One CPU allocation interval |
//! | `Schedule` | Gantt timeline |
//! | `ProcessSpan` | First start and completion of a process |

mod algorithm;
mod process;
mod schedule;

pub use algorithm::Algorithm;
pub use process::{ProcessDescriptor, DEFAULT_PRIORITY};
pub use schedule::{ProcessSpan, Schedule, ScheduleEntry};
