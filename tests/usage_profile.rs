//! 용도 프로파일 CSV 변환 회귀 테스트.
use building_energy_toolbox::usage_profile::{parse_profiles, profile_id};

const HEADER: &str = "Nutzung,Beginn,Ende,Tagesstunden,Nutzungstage,Tag,Nacht,RLT Stunden,RLT Tage,Heizung Stunden,Em,h_Ne,k_A,C_A,reserved,F_te,theta_h,theta_c,theta_h_abs,theta_h_min,theta_c_max,Feuchte,V_A,V_A_flow,C_A_RLT,F_RLT,q_I_p,q_I_fac";

fn csv(rows: &[&str]) -> String {
    let mut s = String::from(HEADER);
    for r in rows {
        s.push('\n');
        s.push_str(r);
    }
    s
}

#[test]
fn profile_row_is_mapped() {
    let src = csv(&[
        "01 Einzelbüro,07:00,18:00,11,250,2543,207,13,250,13,500,0.8,0.84,0.3,x,0.7,21,24,17,20,26,ohne,4,\"1,200\",0.3,1,30,42",
    ]);
    let profiles = parse_profiles(src.as_bytes()).expect("parse");
    assert_eq!(profiles.len(), 1);
    let p = &profiles[0];
    assert_eq!(p.id, "1_single_office");
    assert_eq!(p.name, "01 Einzelbüro");
    assert_eq!(p.usage_hours_start, 7);
    assert_eq!(p.usage_hours_end, 18);
    assert_eq!(p.daily_usage_hours, 11.0);
    assert_eq!(p.annual_usage_days, 250.0);
    assert_eq!(p.hvac_daily_operation_hours, 13.0);
    assert_eq!(p.illuminance, 500.0);
    assert_eq!(p.lighting_absence_factor, 0.3);
    assert_eq!(p.partial_operation_factor_lighting, 0.7);
    assert_eq!(p.heating_setpoint, 21.0);
    assert_eq!(p.cooling_setpoint, 24.0);
    assert_eq!(p.humidity_requirement, "ohne");
    assert_eq!(p.min_outdoor_air_flow, 1200.0);
    assert_eq!(p.metabolic_heat, 30.0);
    assert_eq!(p.equipment_heat, 42.0);
}

#[test]
fn blank_name_rows_are_skipped_and_short_rows_default() {
    let src = csv(&[",07:00,18:00", "42 Wohnen EFH,00:00,24:00,24,365,80%"]);
    let profiles = parse_profiles(src.as_bytes()).expect("parse");
    assert_eq!(profiles.len(), 1);
    let p = &profiles[0];
    assert_eq!(p.id, "residential_single");
    assert_eq!(p.usage_hours_end, 24);
    assert_eq!(p.usage_hours_day, 80.0);
    assert_eq!(p.equipment_heat, 0.0);
    assert_eq!(p.humidity_requirement, "");
}

#[test]
fn signed_hour_keeps_sign() {
    let src = csv(&["10 Bettenzimmer,-1:00,23:00"]);
    let profiles = parse_profiles(src.as_bytes()).expect("parse");
    assert_eq!(profiles[0].id, "10_bed_room");
    assert_eq!(profiles[0].usage_hours_start, -1);
    assert_eq!(profiles[0].usage_hours_end, 23);
}

#[test]
fn shifted_and_unknown_numbers() {
    assert_eq!(profile_id("22.2"), "22_2_workshop_medium");
    assert_eq!(profile_id("28"), "29_library_public");
    assert_eq!(profile_id("30"), "30_library_stack_closed");
    assert_eq!(profile_id("22.4"), "profile_22_4");
    assert_eq!(profile_id("99"), "profile_99");
}
