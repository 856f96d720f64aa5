//! DIN V 18599-10 용도 프로파일 표(CSV 내보내기)를 프로파일 레코드로 변환한다.
//!
//! 표의 첫 행은 헤더이며, 각 행의 첫 칸은 "01 단일 사무실"처럼 번호와 이름으로 구성된다.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 프로파일 표 읽기 오류.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV 파싱 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// 용도 프로파일 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageProfile {
    pub id: String,
    pub name: String,
    /// 사용 시작 시각 [h]
    pub usage_hours_start: i32,
    /// 사용 종료 시각 [h]
    pub usage_hours_end: i32,
    pub daily_usage_hours: f64,
    pub annual_usage_days: f64,
    pub usage_hours_day: f64,
    pub usage_hours_night: f64,
    pub hvac_daily_operation_hours: f64,
    pub hvac_annual_operation_days: f64,
    /// 유지 조도 [lx]
    pub illuminance: f64,
    /// 작업면 높이 [m]
    pub workplane_height: f64,
    pub illuminance_depreciation_factor: f64,
    pub lighting_absence_factor: f64,
    pub partial_operation_factor_lighting: f64,
    /// 난방 설정온도 [°C]
    pub heating_setpoint: f64,
    /// 냉방 설정온도 [°C]
    pub cooling_setpoint: f64,
    pub heating_setback_temp: f64,
    pub heating_design_min_temp: f64,
    pub cooling_design_max_temp: f64,
    pub humidity_requirement: String,
    /// 최소 외기량 [m³/(h·m²)]
    pub min_outdoor_air: f64,
    pub min_outdoor_air_flow: f64,
    pub hvac_absence_factor: f64,
    pub hvac_partial_operation_factor: f64,
    /// 인체 발열 [Wh/(m²·d)]
    pub metabolic_heat: f64,
    /// 기기 발열 [Wh/(m²·d)]
    pub equipment_heat: f64,
}

const PROFILE_IDS: &[(&str, &str)] = &[
    ("01", "1_single_office"),
    ("02", "2_group_office"),
    ("03", "3_open_plan_office"),
    ("04", "4_meeting"),
    ("05", "5_counter"),
    ("06", "6_retail"),
    ("07", "7_retail_refrig"),
    ("08", "8_classroom"),
    ("09", "9_lecture_hall"),
    ("10", "10_bed_room"),
    ("11", "11_hotel_room"),
    ("12", "12_canteen"),
    ("13", "13_restaurant"),
    ("14", "14_kitchen"),
    ("15", "15_kitchen_prep"),
    ("16", "16_wc"),
    ("17", "17_common_area"),
    ("18", "18_support_store"),
    ("19", "19_corridor_care"),
    ("20", "20_storage_uncond"),
    ("21", "21_datacenter"),
    ("22.1", "22_1_workshop_light"),
    ("22.2", "22_2_workshop_medium"),
    ("22.3", "22_3_workshop_heavy"),
    ("23", "23_theater_audience"),
    ("24", "24_cloakroom"),
    ("25", "25_theater_foh"),
    ("26", "26_stage"),
    // 표의 27~30번은 기존 프로파일 번호와 한 칸씩 어긋나 있다.
    ("27", "27_exhibition"),
    ("28", "29_library_public"),
    ("29", "30_library_stack"),
    ("30", "30_library_stack_closed"),
    ("31", "31_gym"),
    ("32", "32_parking_office"),
    ("33", "33_parking_public"),
    ("34", "34_sauna"),
    ("35", "35_fitness"),
    ("36", "36_lab"),
    ("37", "37_exam_room"),
    ("38", "38_icu"),
    ("39", "39_corridor_icu"),
    ("40", "40_medical_practice"),
    ("41", "41_logistics"),
    ("42", "residential_single"),
    ("43", "residential_multi"),
    ("44", "residential_general"),
];

/// 이름 앞 번호로 프로파일 id를 결정한다. 표에 없으면 `profile_<번호>`.
pub fn profile_id(prefix: &str) -> String {
    PROFILE_IDS
        .iter()
        .find(|(key, _)| *key == prefix)
        .map(|(_, id)| id.to_string())
        .unwrap_or_else(|| format!("profile_{}", prefix.replace('.', "_")))
}

/// "1,000", "80%" 같은 셀을 숫자로 읽는다. 읽을 수 없으면 0.
fn clean_num(cell: &str) -> f64 {
    cell.replace([',', '%'], "").trim().parse().unwrap_or(0.0)
}

/// "07:00" 형식에서 시(hour)만 읽는다. 부호는 유지하며 형식이 다르면 0.
fn parse_hour(cell: &str) -> i32 {
    match cell.split_once(':') {
        Some((hour, _)) => hour.trim().parse().unwrap_or(0),
        None => 0,
    }
}

fn profile_from_record(record: &csv::StringRecord) -> Option<UsageProfile> {
    let cell = |i: usize| record.get(i).unwrap_or("");
    let num = |i: usize| clean_num(cell(i));

    let name = cell(0);
    if name.is_empty() {
        return None;
    }
    let prefix = name.split(' ').next().unwrap_or_default();

    Some(UsageProfile {
        id: profile_id(prefix),
        name: name.to_string(),
        usage_hours_start: parse_hour(cell(1)),
        usage_hours_end: parse_hour(cell(2)),
        daily_usage_hours: num(3),
        annual_usage_days: num(4),
        usage_hours_day: num(5),
        usage_hours_night: num(6),
        hvac_daily_operation_hours: num(7),
        hvac_annual_operation_days: num(8),
        illuminance: num(10),
        workplane_height: num(11),
        illuminance_depreciation_factor: num(12),
        lighting_absence_factor: num(13),
        partial_operation_factor_lighting: num(15),
        heating_setpoint: num(16),
        cooling_setpoint: num(17),
        heating_setback_temp: num(18),
        heating_design_min_temp: num(19),
        cooling_design_max_temp: num(20),
        humidity_requirement: cell(21).to_string(),
        min_outdoor_air: num(22),
        min_outdoor_air_flow: num(23),
        hvac_absence_factor: num(24),
        hvac_partial_operation_factor: num(25),
        metabolic_heat: num(26),
        equipment_heat: num(27),
    })
}

/// CSV 입력에서 프로파일 목록을 읽는다. 첫 칸이 빈 행은 건너뛴다.
pub fn parse_profiles<R: Read>(reader: R) -> Result<Vec<UsageProfile>, ProfileError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut profiles = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(profile) = profile_from_record(&record) {
            profiles.push(profile);
        }
    }
    debug!(count = profiles.len(), "usage profiles parsed");
    Ok(profiles)
}

/// CSV 파일에서 프로파일 목록을 읽는다.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<UsageProfile>, ProfileError> {
    let file = File::open(path)?;
    parse_profiles(file)
}
