use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::InfiltrationError;

/// 기밀성 등급. I이 가장 엄격(기밀 시험으로 확인됨)하고 IV가 가장 느슨하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum StandardCategory {
    #[default]
    I,
    II,
    III,
    IV,
}

impl StandardCategory {
    pub const ALL: [StandardCategory; 4] = [
        StandardCategory::I,
        StandardCategory::II,
        StandardCategory::III,
        StandardCategory::IV,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StandardCategory::I => "I",
            StandardCategory::II => "II",
            StandardCategory::III => "III",
            StandardCategory::IV => "IV",
        }
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardCategory {
    type Err = InfiltrationError;

    /// 로마 숫자(I~IV) 또는 아라비아 숫자(1~4)를 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "I" | "1" => Ok(StandardCategory::I),
            "II" | "2" => Ok(StandardCategory::II),
            "III" | "3" => Ok(StandardCategory::III),
            "IV" | "4" => Ok(StandardCategory::IV),
            _ => Err(InfiltrationError::InvalidArgument(format!(
                "기밀성 등급 '{}'",
                s.trim()
            ))),
        }
    }
}

/// 환기 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilationMode {
    /// 자연(창문) 환기
    Natural,
    /// 기계 환기
    Mechanical,
}

impl VentilationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VentilationMode::Natural => "natural",
            VentilationMode::Mechanical => "mechanical",
        }
    }
}

impl fmt::Display for VentilationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VentilationMode {
    type Err = InfiltrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "natural" => Ok(VentilationMode::Natural),
            "mechanical" => Ok(VentilationMode::Mechanical),
            _ => Err(InfiltrationError::InvalidArgument(format!(
                "환기 방식 '{}'",
                s.trim()
            ))),
        }
    }
}
