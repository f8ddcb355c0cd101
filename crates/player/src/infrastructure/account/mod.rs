//! Account backend adapters

mod simulated;

pub use simulated::SimulatedAccountService;
