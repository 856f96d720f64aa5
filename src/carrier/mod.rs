//! 에너지원(energy carrier)별 1차에너지 계수 및 CO2 배출계수 모듈 모음.

pub mod energy_carrier;
pub mod factors;

pub use energy_carrier::*;
pub use factors::*;
