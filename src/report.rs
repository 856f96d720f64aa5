//! 집계/기밀성/에너지원 계수를 한데 묶은 표준값 보고서.

use serde::Serialize;

use crate::building::{aggregate, transmission_heat_transfer, ProjectStats};
use crate::carrier::{EnergyCarrier, FactorTable};
use crate::infiltration::{InfiltrationRate, LeakageTable, StandardCategory, VentilationMode};
use crate::project::Project;

/// 에너지원 하나의 계수 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarrierRow {
    pub carrier: EnergyCarrier,
    pub pef: f64,
    /// [kg/kWh]
    pub co2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardValuesReport {
    pub project: String,
    pub revision: String,
    pub stats: ProjectStats,
    /// H_T [W/K]
    pub transmission_w_per_k: f64,
    /// H_T' [W/m²K]
    pub specific_transmission: Option<f64>,
    pub ventilation_mode: VentilationMode,
    pub category: StandardCategory,
    pub infiltration: InfiltrationRate,
    pub carriers: Vec<CarrierRow>,
}

impl StandardValuesReport {
    /// 프로젝트 스냅샷으로부터 보고서를 만든다. 에너지원은 입력 순서를 유지하고 중복은 제거한다.
    pub fn build(project: &Project, factors: &FactorTable, leakage: &LeakageTable) -> Self {
        let stats = aggregate(&project.zones, &project.surfaces);
        let h_t = transmission_heat_transfer(&project.zones, &project.surfaces);
        let infiltration = leakage.resolve(
            stats.total_volume,
            stats.total_envelope_area,
            project.ventilation_mode,
            project.category,
        );

        let mut carriers: Vec<CarrierRow> = Vec::with_capacity(project.carriers.len());
        for &carrier in &project.carriers {
            if carriers.iter().any(|row| row.carrier == carrier) {
                continue;
            }
            carriers.push(CarrierRow {
                carrier,
                pef: factors.pef(carrier),
                co2: factors.co2(carrier),
            });
        }

        Self {
            project: project.name.clone(),
            revision: factors.revision.to_string(),
            stats,
            transmission_w_per_k: h_t,
            specific_transmission: stats.specific_transmission(h_t),
            ventilation_mode: project.ventilation_mode,
            category: project.category,
            infiltration,
            carriers,
        }
    }
}
