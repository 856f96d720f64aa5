//! config.toml 파싱/검증 회귀 테스트.
use building_energy_toolbox::carrier::{EnergyCarrier, FactorTable};
use building_energy_toolbox::config::{Config, ConfigError};
use building_energy_toolbox::infiltration::{LeakageTable, StandardCategory, VentilationMode};

#[test]
fn empty_file_uses_defaults() {
    let cfg = Config::from_toml_str("").expect("empty config");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.factors, FactorTable::GEG_2020);
    assert_eq!(cfg.leakage, LeakageTable::DIN_V_18599_2);
}

#[test]
fn default_config_survives_toml() {
    let cfg = Config::default();
    let text = cfg.to_toml_string().expect("serialize");
    let back = Config::from_toml_str(&text).expect("parse back");
    assert_eq!(back, cfg);
}

#[test]
fn revised_tables_from_file() {
    let src = r#"
language = "en"

[factors]
revision = "GEG 2024 draft"

[factors.primary_energy]
electricity = 1.2
natural_gas = 1.1
oil = 1.1
lpg = 1.1
district_heating = 0.6
wood_pellet = 0.2

[factors.co2]
electricity = 0.38
natural_gas = 0.24
oil = 0.31
lpg = 0.27
district_heating = 0.15
wood_pellet = 0.02

[leakage]
volume_threshold_m3 = 1500.0
fallback_n50 = 2.0

[leakage.category_i]
small_n50 = { natural = 1.5, mechanical = 0.6 }
large_q50 = { natural = 2.5, mechanical = 1.5 }

[leakage.category_ii]
small_n50 = 4.0
large_q50 = 6.0

[leakage.category_iii]
small_n50 = 6.0
large_q50 = 9.0

[leakage.category_iv]
small_n50 = 10.0
large_q50 = 15.0
"#;
    let cfg = Config::from_toml_str(src).expect("config");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.factors.revision, "GEG 2024 draft");
    assert_eq!(cfg.factors.pef(EnergyCarrier::HeatPumpGeo), 1.2);
    assert_eq!(cfg.factors.co2(EnergyCarrier::HeatPumpAir), 0.38);
    assert_eq!(cfg.factors.pef(EnergyCarrier::SolarThermal), 0.0);

    let rate = cfg
        .leakage
        .resolve(800.0, 400.0, VentilationMode::Mechanical, StandardCategory::I);
    assert_eq!(rate.value, 0.6);
}

#[test]
fn negative_factor_in_file_rejected() {
    let src = r#"
[factors]
revision = "broken"

[factors.primary_energy]
electricity = -1.8
natural_gas = 1.1
oil = 1.1
lpg = 1.1
district_heating = 0.7
wood_pellet = 0.2

[factors.co2]
electricity = 0.56
natural_gas = 0.24
oil = 0.31
lpg = 0.27
district_heating = 0.18
wood_pellet = 0.02
"#;
    assert!(matches!(
        Config::from_toml_str(src),
        Err(ConfigError::InvalidFactors(_))
    ));
}

#[test]
fn missing_carrier_in_file_rejected() {
    let src = r#"
[factors]
revision = "incomplete"

[factors.primary_energy]
electricity = 1.8

[factors.co2]
electricity = 0.56
"#;
    assert!(matches!(
        Config::from_toml_str(src),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn invalid_leakage_threshold_rejected() {
    let mut cfg = Config::default();
    cfg.leakage.volume_threshold_m3 = -1.0;
    let text = cfg.to_toml_string().expect("serialize");
    assert!(matches!(
        Config::from_toml_str(&text),
        Err(ConfigError::InvalidLeakage(_))
    ));
}
