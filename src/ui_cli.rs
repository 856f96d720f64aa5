use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::building::ProjectStats;
use crate::carrier::{EnergyCarrier, FactorTable};
use crate::i18n::{keys, Translator};
use crate::infiltration::{InfiltrationRate, RateBasis, StandardCategory, VentilationMode};
use crate::report::StandardValuesReport;

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    name = "building_energy_toolbox",
    version,
    about = "DIN V 18599 standard values: carrier factors, building aggregate, n50"
)]
pub struct Cli {
    /// 출력 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    /// 설정 파일 경로. 없으면 ./config.toml을 사용(없으면 생성)한다.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 로그 상세도 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 에너지원 계수 표를 출력한다.
    Factors {
        /// 특정 에너지원만 출력 (예: natural_gas)
        carrier: Option<EnergyCarrier>,
    },
    /// 프로젝트 파일의 체적/외피 면적을 집계한다.
    Stats { project: PathBuf },
    /// 체적과 외피 면적으로 n50 표준값을 산정한다.
    N50 {
        /// 총 체적 [m³]
        #[arg(long, allow_negative_numbers = true)]
        volume: f64,
        /// 총 외피 면적 [m²]
        #[arg(long, allow_negative_numbers = true)]
        area: f64,
        #[arg(long, default_value = "natural")]
        ventilation: VentilationMode,
        #[arg(long, default_value = "I")]
        category: StandardCategory,
    },
    /// 프로젝트 파일 전체 표준값 보고서를 출력한다.
    Report { project: PathBuf },
    /// 용도 프로파일 CSV를 TOML로 변환해 출력한다.
    Profiles { csv: PathBuf },
}

/// 계수 표를 출력한다. `only`가 주어지면 그 에너지원만 출력한다.
pub fn print_factors(tr: &Translator, table: &FactorTable, only: Option<EnergyCarrier>) {
    println!("\n-- {} ({}) --", tr.t(keys::FACTORS_HEADING), table.revision);
    println!("{}", tr.t(keys::FACTORS_COLUMNS));
    let carriers: Vec<EnergyCarrier> = match only {
        Some(c) => vec![c],
        None => EnergyCarrier::ALL.to_vec(),
    };
    for carrier in carriers {
        println!(
            "{:<18} {:>8.2}   {:>10.3}",
            carrier.as_str(),
            table.pef(carrier),
            table.co2(carrier)
        );
    }
}

/// 건물 집계 결과를 출력한다.
pub fn print_stats(tr: &Translator, stats: &ProjectStats, h_t: f64) {
    println!("\n-- {} --", tr.t(keys::STATS_HEADING));
    println!("{}: {:.2} m³", tr.t(keys::STATS_TOTAL_VOLUME), stats.total_volume);
    println!(
        "{}: {:.2} m²",
        tr.t(keys::STATS_ENVELOPE_AREA),
        stats.total_envelope_area
    );
    if stats.total_volume > 0.0 {
        println!(
            "{}: {:.3} 1/m",
            tr.t(keys::STATS_AV_RATIO),
            stats.total_envelope_area / stats.total_volume
        );
    }
    println!("{}: {:.2} W/K", tr.t(keys::STATS_TRANSMISSION), h_t);
    match stats.specific_transmission(h_t) {
        Some(v) => println!("{}: {:.3} W/m²K", tr.t(keys::STATS_SPECIFIC_TRANSMISSION), v),
        None => println!(
            "{}: {}",
            tr.t(keys::STATS_SPECIFIC_TRANSMISSION),
            tr.t(keys::VALUE_NOT_AVAILABLE)
        ),
    }
}

/// 기밀성 산정 결과와 산정 근거를 출력한다.
pub fn print_infiltration(tr: &Translator, rate: &InfiltrationRate) {
    println!("\n-- {} --", tr.t(keys::N50_HEADING));
    println!("{}: {:.3} 1/h", tr.t(keys::N50_VALUE), rate.value);
    match rate.basis {
        RateBasis::Fallback => println!("  {}", tr.t(keys::N50_BASIS_FALLBACK)),
        RateBasis::VolumeBased => println!("  {}", tr.t(keys::N50_BASIS_VOLUME)),
        RateBasis::EnvelopeScaled { q50 } => println!(
            "  {} (q50 = {:.2} m³/(h·m²))",
            tr.t(keys::N50_BASIS_ENVELOPE),
            q50
        ),
    }
}

pub fn print_report(tr: &Translator, report: &StandardValuesReport) {
    println!("\n=== {}: {} ===", tr.t(keys::REPORT_HEADING), report.project);
    println!(
        "{}: {} / {}",
        tr.t(keys::REPORT_CLASSIFICATION),
        report.ventilation_mode,
        report.category
    );
    print_stats(tr, &report.stats, report.transmission_w_per_k);
    print_infiltration(tr, &report.infiltration);

    println!("\n-- {} ({}) --", tr.t(keys::FACTORS_HEADING), report.revision);
    if report.carriers.is_empty() {
        println!("{}", tr.t(keys::REPORT_NO_CARRIERS));
        return;
    }
    println!("{}", tr.t(keys::FACTORS_COLUMNS));
    for row in &report.carriers {
        println!(
            "{:<18} {:>8.2}   {:>10.3}",
            row.carrier.as_str(),
            row.pef,
            row.co2
        );
    }
}
