use serde::Serialize;
use tracing::info;

use crate::building::{aggregate, transmission_heat_transfer};
use crate::config::Config;
use crate::i18n::Translator;
use crate::project::{Project, ProjectError};
use crate::report::StandardValuesReport;
use crate::ui_cli::{self, Cli, Command};
use crate::usage_profile::{self, ProfileError, UsageProfile};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// 프로젝트 파일 오류
    #[error("{0}")]
    Project(#[from] ProjectError),
    /// 용도 프로파일 표 오류
    #[error("용도 프로파일 오류: {0}")]
    Profile(#[from] ProfileError),
    /// 결과 직렬화 오류
    #[error("출력 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize)]
struct ProfileFile<'a> {
    profiles: &'a [UsageProfile],
}

/// 선택된 하위 명령을 실행한다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    match &cli.command {
        Command::Factors { carrier } => ui_cli::print_factors(tr, &config.factors, *carrier),
        Command::Stats { project } => {
            let project = Project::load(project)?;
            let stats = aggregate(&project.zones, &project.surfaces);
            let h_t = transmission_heat_transfer(&project.zones, &project.surfaces);
            ui_cli::print_stats(tr, &stats, h_t);
        }
        Command::N50 {
            volume,
            area,
            ventilation,
            category,
        } => {
            let rate = config.leakage.resolve(*volume, *area, *ventilation, *category);
            ui_cli::print_infiltration(tr, &rate);
        }
        Command::Report { project } => {
            let project = Project::load(project)?;
            info!(project = %project.name, zones = project.zones.len(), "building report");
            let report = StandardValuesReport::build(&project, &config.factors, &config.leakage);
            ui_cli::print_report(tr, &report);
        }
        Command::Profiles { csv } => {
            let profiles = usage_profile::load_profiles(csv)?;
            let out = toml::to_string_pretty(&ProfileFile {
                profiles: &profiles,
            })?;
            println!("{out}");
        }
    }
    Ok(())
}
