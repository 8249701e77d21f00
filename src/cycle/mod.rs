//! 이상 랭킨 사이클 계산 모듈 모음.

pub mod advisory;
pub mod error;
pub mod inputs;
pub mod solver;
pub mod state;
pub mod sweep;

pub use advisory::{review, Advisory};
pub use error::{DegenerateCycle, SolveError};
pub use inputs::{CycleInputs, DisplayInputs, InputRanges, RangeSpec};
pub use solver::solve;
pub use state::{CycleResult, StateLabel, StatePoint};
pub use sweep::{boiler_pressure_sweep, SweepError, SweepPoint, MAX_SWEEP_STEPS};
