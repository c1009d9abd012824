//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Computes the single-CPU execution timeline (Gantt schedule) and
//! performance metrics of a process list under a classic scheduling
//! discipline. The simulation is a pure computation: no process is
//! executed, nothing is retained between calls.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `Algorithm`,
//!   `Schedule`, `ScheduleEntry`
//! - **`dispatching`**: Ordering rules and the stable rule engine
//! - **`scheduler`**: `simulate`, `Simulator`, configuration, metrics
//! - **`trace`**: Step-by-step explanation of a run
//! - **`validation`**: Input contract checks
//! - **`compare`**: All algorithms side by side
//! - **`workload`**: Seeded workload generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Algorithm, ProcessDescriptor};
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![
//!     ProcessDescriptor::new("1", 5),
//!     ProcessDescriptor::new("2", 3).with_arrival_time(1),
//! ];
//! let result = simulate(&processes, Algorithm::Sjf, None).unwrap();
//!
//! assert_eq!(result.schedule.entries[0].process_id, "2");
//! assert_eq!(result.schedule.entries[0].start_time, 1);
//! assert_eq!(result.schedule.entries[1].start_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod compare;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod trace;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
