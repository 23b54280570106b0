//! Thermodynamic property models.

pub mod perfect_gas;

pub(crate) mod ideal_gas_eos;

pub use perfect_gas::PerfectGas;
