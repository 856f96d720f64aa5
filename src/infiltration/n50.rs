//! 체적 크기와 기밀성 등급에 따른 n50 표준값 산정.
//!
//! 소규모 건물(체적 ≤ 임계값)은 테이블 값이 곧 n50 [1/h]이다. 대규모 건물은
//! 테이블 값을 외피 면적 기준 q50 [m³/(h·m²)]로 보고 A/V를 곱해 n50으로 환산한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{InfiltrationError, StandardCategory, VentilationMode};

/// 테이블 항목 값. 환기 방식과 무관한 단일 값이거나 환기 방식별 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeakageValue {
    Single(f64),
    ByVentilation { natural: f64, mechanical: f64 },
}

impl LeakageValue {
    pub fn get(&self, mode: VentilationMode) -> f64 {
        match (self, mode) {
            (LeakageValue::Single(v), _) => *v,
            (LeakageValue::ByVentilation { natural, .. }, VentilationMode::Natural) => *natural,
            (LeakageValue::ByVentilation { mechanical, .. }, VentilationMode::Mechanical) => {
                *mechanical
            }
        }
    }

    fn values(&self) -> [f64; 2] {
        match self {
            LeakageValue::Single(v) => [*v, *v],
            LeakageValue::ByVentilation {
                natural,
                mechanical,
            } => [*natural, *mechanical],
        }
    }
}

/// 등급별 소규모/대규모 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// 소규모 건물 n50 [1/h]
    pub small_n50: LeakageValue,
    /// 대규모 건물 q50 [m³/(h·m²)]
    pub large_q50: LeakageValue,
}

/// 산정 결과가 어느 분기에서 나왔는지.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateBasis {
    /// 체적이 0 이하라서 기본값을 사용함. 실제 물리값이 아니다.
    Fallback,
    /// 소규모 테이블 값 그대로 [1/h]
    VolumeBased,
    /// q50 × A/V 로 환산 [1/h]
    EnvelopeScaled { q50: f64 },
}

/// 기밀성 산정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfiltrationRate {
    /// n50 [1/h]
    pub value: f64,
    pub basis: RateBasis,
}

/// 기밀성 표준값 테이블. 설정 파일로 교체할 수 있는 데이터다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakageTable {
    /// 소규모/대규모 구분 체적 [m³]
    pub volume_threshold_m3: f64,
    /// 체적이 0 이하일 때 돌려주는 기본값
    pub fallback_n50: f64,
    pub category_i: CategoryEntry,
    pub category_ii: CategoryEntry,
    pub category_iii: CategoryEntry,
    pub category_iv: CategoryEntry,
}

impl LeakageTable {
    pub const DIN_V_18599_2: LeakageTable = LeakageTable {
        volume_threshold_m3: 1500.0,
        fallback_n50: 2.0,
        category_i: CategoryEntry {
            small_n50: LeakageValue::ByVentilation {
                natural: 2.0,
                mechanical: 1.0,
            },
            large_q50: LeakageValue::ByVentilation {
                natural: 3.0,
                mechanical: 2.0,
            },
        },
        category_ii: CategoryEntry {
            small_n50: LeakageValue::Single(4.0),
            large_q50: LeakageValue::Single(6.0),
        },
        category_iii: CategoryEntry {
            small_n50: LeakageValue::Single(6.0),
            large_q50: LeakageValue::Single(9.0),
        },
        category_iv: CategoryEntry {
            small_n50: LeakageValue::Single(10.0),
            large_q50: LeakageValue::Single(15.0),
        },
    };

    pub fn entry(&self, category: StandardCategory) -> &CategoryEntry {
        match category {
            StandardCategory::I => &self.category_i,
            StandardCategory::II => &self.category_ii,
            StandardCategory::III => &self.category_iii,
            StandardCategory::IV => &self.category_iv,
        }
    }

    /// 집계 체적/외피 면적과 환기 방식, 등급으로 n50을 산정한다.
    pub fn resolve(
        &self,
        total_volume: f64,
        total_envelope_area: f64,
        mode: VentilationMode,
        category: StandardCategory,
    ) -> InfiltrationRate {
        // NaN도 기본값 분기로 보낸다.
        if !(total_volume > 0.0) {
            warn!(
                total_volume,
                fallback = self.fallback_n50,
                "volume is not positive, using fallback n50"
            );
            return InfiltrationRate {
                value: self.fallback_n50,
                basis: RateBasis::Fallback,
            };
        }

        let entry = self.entry(category);
        let rate = if total_volume <= self.volume_threshold_m3 {
            InfiltrationRate {
                value: entry.small_n50.get(mode),
                basis: RateBasis::VolumeBased,
            }
        } else {
            let q50 = entry.large_q50.get(mode);
            InfiltrationRate {
                value: q50 * (total_envelope_area / total_volume),
                basis: RateBasis::EnvelopeScaled { q50 },
            }
        };
        debug!(
            total_volume,
            total_envelope_area,
            %mode,
            %category,
            n50 = rate.value,
            "infiltration resolved"
        );
        rate
    }

    /// 설정에서 읽은 테이블을 검증한다.
    pub fn validate(&self) -> Result<(), InfiltrationError> {
        if !(self.volume_threshold_m3.is_finite() && self.volume_threshold_m3 > 0.0) {
            return Err(InfiltrationError::InvalidTable(format!(
                "volume_threshold_m3 = {}",
                self.volume_threshold_m3
            )));
        }
        if !(self.fallback_n50.is_finite() && self.fallback_n50 >= 0.0) {
            return Err(InfiltrationError::InvalidTable(format!(
                "fallback_n50 = {}",
                self.fallback_n50
            )));
        }
        for category in StandardCategory::ALL {
            let entry = self.entry(category);
            let values = entry
                .small_n50
                .values()
                .into_iter()
                .chain(entry.large_q50.values());
            for v in values {
                if !v.is_finite() || v < 0.0 {
                    return Err(InfiltrationError::InvalidTable(format!(
                        "category {category}: {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for LeakageTable {
    fn default() -> Self {
        LeakageTable::DIN_V_18599_2
    }
}

/// 기본 테이블(DIN V 18599-2) 기준 n50 [1/h].
///
/// 체적이 0 이하이면 기본값 2.0을 돌려준다. 이는 입력 데이터가 없다는 뜻일 수
/// 있으므로 실제 산정값으로 해석하면 안 된다.
pub fn resolve_n50(
    total_volume: f64,
    total_envelope_area: f64,
    mode: VentilationMode,
    category: StandardCategory,
) -> f64 {
    LeakageTable::DIN_V_18599_2
        .resolve(total_volume, total_envelope_area, mode, category)
        .value
}
