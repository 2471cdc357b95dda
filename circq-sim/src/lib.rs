//! Quantum circuit simulator
//!
//! Replays a validated [`circq_core::Circuit`] against an exact
//! state vector and derives measurement statistics, entanglement entropy
//! and diagnostic reports from the final state.
//!
//! # Example
//! ```
//! use circq_core::{Circuit, QubitId};
//! use circq_core::gates::{Cnot, Hadamard};
//! use circq_sim::{Simulator, SimulatorConfig};
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//! circuit.add_gate(Arc::new(Cnot), &[QubitId::new(0), QubitId::new(1)]).unwrap();
//!
//! let simulator = Simulator::new(SimulatorConfig::default().with_seed(7)).unwrap();
//! let result = simulator.run(&circuit).unwrap();
//! assert_eq!(result.measurements.total(), 1024);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod result;
pub mod simulator;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use report::StateReport;
pub use result::SimulationResult;
pub use simulator::Simulator;

/// Type alias for results in circq-sim
pub type Result<T> = std::result::Result<T, SimulatorError>;
