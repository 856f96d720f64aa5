use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Surface, Zone};

/// 존/외피 스냅샷에서 계산되는 건물 집계값. 저장하지 않고 필요할 때 다시 계산한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// 제외되지 않은 존의 체적 합 [m³]
    pub total_volume: f64,
    /// 제외 존에 속하지 않은 외피 면적 합 [m²]
    pub total_envelope_area: f64,
}

impl ProjectStats {
    /// 비전열손실계수 H_T' = H_T / A [W/m²K]. 외피 면적이 0이면 None.
    pub fn specific_transmission(&self, h_t: f64) -> Option<f64> {
        if self.total_envelope_area > 0.0 {
            Some(h_t / self.total_envelope_area)
        } else {
            None
        }
    }
}

fn excluded_zone_ids(zones: &[Zone]) -> HashSet<&str> {
    zones
        .iter()
        .filter(|z| z.is_excluded)
        .map(|z| z.id.as_str())
        .collect()
}

/// 외피가 집계 대상인지 판정한다. zone_id가 없거나 알 수 없는 존이면 포함한다.
fn is_counted(surface: &Surface, excluded: &HashSet<&str>) -> bool {
    match surface.zone_id.as_deref() {
        Some(zone_id) => !excluded.contains(zone_id),
        None => true,
    }
}

/// 존 체적과 외피 면적을 집계한다. 입력은 변경하지 않는다.
pub fn aggregate(zones: &[Zone], surfaces: &[Surface]) -> ProjectStats {
    let total_volume = zones
        .iter()
        .filter(|z| !z.is_excluded)
        .map(Zone::effective_volume)
        .fold(0.0, |acc, v| acc + v);

    let excluded = excluded_zone_ids(zones);
    let total_envelope_area = surfaces
        .iter()
        .filter(|s| is_counted(s, &excluded))
        .map(|s| s.area)
        .fold(0.0, |acc, a| acc + a);

    debug!(
        zones = zones.len(),
        surfaces = surfaces.len(),
        excluded = excluded.len(),
        total_volume,
        total_envelope_area,
        "building aggregated"
    );

    ProjectStats {
        total_volume,
        total_envelope_area,
    }
}

/// 집계 대상 외피의 전열손실계수 H_T = Σ U·A [W/K].
pub fn transmission_heat_transfer(zones: &[Zone], surfaces: &[Surface]) -> f64 {
    let excluded = excluded_zone_ids(zones);
    surfaces
        .iter()
        .filter(|s| is_counted(s, &excluded))
        .map(|s| s.u_value * s.area)
        .fold(0.0, |acc, ua| acc + ua)
}
