//! 에너지원별 1차에너지 계수(PEF)와 CO2 배출계수 테이블.
//!
//! 독립 계수를 가지는 에너지원만 테이블에 저장한다. 히트펌프는 항상 전기 계수를,
//! 태양열은 항상 0을 돌려주므로 어느 개정판에서도 두 규칙이 깨지지 않는다.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::EnergyCarrier;

/// 계수 테이블 검증 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorError {
    /// 음수이거나 유한하지 않은 계수
    #[error("{table} 테이블의 {carrier} 계수가 잘못되었습니다: {value}")]
    InvalidFactor {
        table: &'static str,
        carrier: EnergyCarrier,
        value: f64,
    },
}

/// 독립 계수를 가지는 에너지원별 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarrierFactors {
    pub electricity: f64,
    pub natural_gas: f64,
    pub oil: f64,
    pub lpg: f64,
    pub district_heating: f64,
    pub wood_pellet: f64,
}

impl CarrierFactors {
    /// 에너지원에 해당하는 값을 반환한다.
    pub fn get(&self, carrier: EnergyCarrier) -> f64 {
        match carrier {
            EnergyCarrier::Electricity | EnergyCarrier::HeatPumpAir | EnergyCarrier::HeatPumpGeo => {
                self.electricity
            }
            EnergyCarrier::NaturalGas => self.natural_gas,
            EnergyCarrier::Oil => self.oil,
            EnergyCarrier::Lpg => self.lpg,
            EnergyCarrier::DistrictHeating => self.district_heating,
            EnergyCarrier::WoodPellet => self.wood_pellet,
            EnergyCarrier::SolarThermal => 0.0,
        }
    }

    fn validate(&self, table: &'static str) -> Result<(), FactorError> {
        for carrier in EnergyCarrier::ALL {
            let value = self.get(carrier);
            if !value.is_finite() || value < 0.0 {
                return Err(FactorError::InvalidFactor {
                    table,
                    carrier,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// 기준 개정판 태그가 붙은 계수 테이블.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    /// 출처가 되는 기준 개정판 (예: "GEG 2020 / DIN V 18599-1:2018-09")
    pub revision: Cow<'static, str>,
    /// 비재생 1차에너지 계수 [-]
    pub primary_energy: CarrierFactors,
    /// CO2 배출계수 [kg/kWh]
    pub co2: CarrierFactors,
}

impl FactorTable {
    /// GEG 2020 부록 4/9 값.
    pub const GEG_2020: FactorTable = FactorTable {
        revision: Cow::Borrowed("GEG 2020 / DIN V 18599-1:2018-09"),
        primary_energy: CarrierFactors {
            electricity: 1.8,
            natural_gas: 1.1,
            oil: 1.1,
            lpg: 1.1,
            district_heating: 0.7,
            wood_pellet: 0.2,
        },
        co2: CarrierFactors {
            electricity: 0.560,
            natural_gas: 0.240,
            oil: 0.310,
            lpg: 0.270,
            district_heating: 0.180,
            wood_pellet: 0.020,
        },
    };

    /// 1차에너지 계수를 조회한다.
    pub fn pef(&self, carrier: EnergyCarrier) -> f64 {
        self.primary_energy.get(carrier)
    }

    /// CO2 배출계수 [kg/kWh]를 조회한다.
    pub fn co2(&self, carrier: EnergyCarrier) -> f64 {
        self.co2.get(carrier)
    }

    /// 최종에너지 [kWh]를 1차에너지 [kWh]로 환산한다.
    pub fn primary_energy_kwh(&self, carrier: EnergyCarrier, final_kwh: f64) -> f64 {
        final_kwh * self.pef(carrier)
    }

    /// 최종에너지 [kWh]에 대한 CO2 배출량 [kg].
    pub fn emissions_kg(&self, carrier: EnergyCarrier, final_kwh: f64) -> f64 {
        final_kwh * self.co2(carrier)
    }

    /// 설정 파일에서 읽은 개정판이 음수/NaN 계수를 포함하지 않는지 확인한다.
    pub fn validate(&self) -> Result<(), FactorError> {
        self.primary_energy.validate("primary_energy")?;
        self.co2.validate("co2")
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        FactorTable::GEG_2020
    }
}

/// 기본 개정판 기준 1차에너지 계수.
pub fn lookup_pef(carrier: EnergyCarrier) -> f64 {
    FactorTable::GEG_2020.pef(carrier)
}

/// 기본 개정판 기준 CO2 배출계수 [kg/kWh].
pub fn lookup_co2(carrier: EnergyCarrier) -> f64 {
    FactorTable::GEG_2020.co2(carrier)
}
