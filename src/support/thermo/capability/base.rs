/// Base trait for thermodynamic property models.
///
/// A model is tied to one `Fluid` type, which names the substance (and any
/// state-defining data such as composition).
/// Capability traits such as [`HasEnthalpy`](super::HasEnthalpy) build on it.
pub trait ThermoModel {
    type Fluid;
}
