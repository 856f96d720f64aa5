use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::carrier::{FactorError, FactorTable};
use crate::infiltration::{InfiltrationError, LeakageTable};

const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 기준 개정판 테이블도 설정 데이터로 함께 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 출력 언어 코드 (auto/ko/en)
    #[serde(default = "default_language")]
    pub language: String,
    /// 에너지원 계수 개정판
    #[serde(default)]
    pub factors: FactorTable,
    /// 기밀성 표준값 테이블
    #[serde(default)]
    pub leakage: LeakageTable,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            factors: FactorTable::default(),
            leakage: LeakageTable::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 계수 테이블 값 오류
    #[error("계수 테이블 오류: {0}")]
    InvalidFactors(#[from] FactorError),
    /// 기밀성 테이블 값 오류
    #[error("기밀성 테이블 오류: {0}")]
    InvalidLeakage(#[from] InfiltrationError),
}

impl Config {
    /// TOML 문자열을 읽고 테이블을 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(src)?;
        cfg.factors.validate()?;
        cfg.leakage.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let cfg = Config::from_toml_str(&content)?;
    info!(path = %path.display(), revision = %cfg.factors.revision, "config loaded");
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = cfg.to_toml_string()?;
    fs::write(path, content)?;
    Ok(())
}
