use serde::{Deserialize, Serialize};

/// 열적으로 구분되는 건물 구역.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 바닥 면적 [m²]
    pub area: f64,
    /// 실 높이 [m]
    pub height: f64,
    /// 직접 입력한 체적 [m³]. 없으면 면적×높이를 사용한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// 비공조 공간 등 열/체적 집계에서 제외되는 존
    #[serde(default)]
    pub is_excluded: bool,
}

impl Zone {
    pub fn new(id: impl Into<String>, area: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            area,
            height,
            volume: None,
            is_excluded: false,
        }
    }

    /// 직접 입력 체적이 있으면 그 값을, 없으면 면적×높이를 반환한다.
    pub fn effective_volume(&self) -> f64 {
        self.volume.unwrap_or(self.area * self.height)
    }
}

/// 외피 요소 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    #[default]
    Wall,
    Roof,
    Floor,
    Window,
    Door,
}

/// 존에 속한 열적 외피 요소.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub id: String,
    /// 소속 존 id (참조일 뿐 소유 관계는 아니다)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub kind: SurfaceKind,
    /// 면적 [m²]
    pub area: f64,
    /// 열관류율 [W/m²K]
    pub u_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// 경사각 [°]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt: Option<f64>,
}

impl Surface {
    pub fn new(id: impl Into<String>, zone_id: Option<&str>, area: f64, u_value: f64) -> Self {
        Self {
            id: id.into(),
            zone_id: zone_id.map(str::to_string),
            kind: SurfaceKind::default(),
            area,
            u_value,
            orientation: None,
            tilt: None,
        }
    }
}
