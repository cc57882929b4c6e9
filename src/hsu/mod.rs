//! HSU(Hydrostatic Swivel Unit) 성능 계산 모듈 모음.
//! 오일 물성, 펌핑 그룹 치수, 누설/효율 모델, 성능 계산기, 차지 펌프 유량, 구조 하중으로 구성한다.

pub mod charge;
pub mod constants;
pub mod curve;
pub mod efficiency;
pub mod error;
pub mod leakage;
pub mod loads;
pub mod oil;
pub mod performance;
pub mod sizes;

pub use charge::ChargePumpFlows;
pub use constants::{
    DesignConstants, EfficiencyCoefficients, MAX_CHARGE_PRESSURE_BAR, MAX_DISCHARGE_PRESSURE_BAR,
    MAX_DISPLACEMENT_CC, MAX_PUMP_SPEED_RPM, MAX_SWASH_ANGLE_DEG, MIN_LOADED_DIFFERENTIAL_BAR,
    MIN_PUMP_SPEED_RPM, PISTON_COUNT,
};
pub use efficiency::{efficiencies, EfficiencyFactors, HsuEfficiencies, OperatingPoint};
pub use error::{HsuError, HsuResult, Quantity};
pub use leakage::Leakage;
pub use loads::{compute_loads, StructuralLoads};
pub use oil::{find_oil, oils, Oil, OilState};
pub use performance::{compute, HsuCalculator, MachinePerformance, OperatingInputs, PerformanceResult};
pub use sizes::PumpingGroup;
