//! 프로젝트 파일(TOML) 로드. 존/외피 레코드와 사용자가 고른 분류 입력을 담는다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::building::{Surface, Zone};
use crate::carrier::EnergyCarrier;
use crate::infiltration::{StandardCategory, VentilationMode};

/// 프로젝트 파일 로드 오류.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("프로젝트 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("프로젝트 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 에너지 평가 프로젝트 한 건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub ventilation_mode: VentilationMode,
    #[serde(default)]
    pub category: StandardCategory,
    /// 설비가 사용하는 에너지원
    #[serde(default)]
    pub carriers: Vec<EnergyCarrier>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub surfaces: Vec<Surface>,
}

impl Project {
    pub fn from_toml_str(src: &str) -> Result<Self, ProjectError> {
        Ok(toml::from_str(src)?)
    }

    /// 경로의 프로젝트 파일을 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
