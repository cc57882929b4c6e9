//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod pressure;
pub mod temperature;
pub mod viscosity;

pub use flow::{convert_flow, FlowUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
