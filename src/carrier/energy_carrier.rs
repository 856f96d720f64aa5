use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 에너지원 식별 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarrierError {
    /// 닫힌 에너지원 목록에 없는 이름
    #[error("지원하지 않는 에너지원: {0}")]
    Unsupported(String),
}

/// 건물 설비가 사용하는 에너지원. 런타임에 추가되거나 삭제되지 않는 닫힌 목록이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCarrier {
    Electricity,
    NaturalGas,
    Oil,
    Lpg,
    DistrictHeating,
    WoodPellet,
    /// 태양열. 1차에너지/배출량이 0으로 취급된다.
    SolarThermal,
    /// 공기열원 히트펌프 (전기 구동)
    HeatPumpAir,
    /// 지열원 히트펌프 (전기 구동)
    HeatPumpGeo,
}

impl EnergyCarrier {
    pub const ALL: [EnergyCarrier; 9] = [
        EnergyCarrier::Electricity,
        EnergyCarrier::NaturalGas,
        EnergyCarrier::Oil,
        EnergyCarrier::Lpg,
        EnergyCarrier::DistrictHeating,
        EnergyCarrier::WoodPellet,
        EnergyCarrier::SolarThermal,
        EnergyCarrier::HeatPumpAir,
        EnergyCarrier::HeatPumpGeo,
    ];

    /// 직렬화에 쓰이는 snake_case 이름.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyCarrier::Electricity => "electricity",
            EnergyCarrier::NaturalGas => "natural_gas",
            EnergyCarrier::Oil => "oil",
            EnergyCarrier::Lpg => "lpg",
            EnergyCarrier::DistrictHeating => "district_heating",
            EnergyCarrier::WoodPellet => "wood_pellet",
            EnergyCarrier::SolarThermal => "solar_thermal",
            EnergyCarrier::HeatPumpAir => "heat_pump_air",
            EnergyCarrier::HeatPumpGeo => "heat_pump_geo",
        }
    }
}

impl fmt::Display for EnergyCarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyCarrier {
    type Err = CarrierError;

    /// `natural_gas`, `Natural-Gas` 처럼 대소문자와 `-`/`_` 차이는 허용한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        EnergyCarrier::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| CarrierError::Unsupported(s.trim().to_string()))
    }
}
