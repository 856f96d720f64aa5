use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const FACTORS_HEADING: &str = "factors.heading";
    pub const FACTORS_COLUMNS: &str = "factors.columns";

    pub const STATS_HEADING: &str = "stats.heading";
    pub const STATS_TOTAL_VOLUME: &str = "stats.total_volume";
    pub const STATS_ENVELOPE_AREA: &str = "stats.envelope_area";
    pub const STATS_TRANSMISSION: &str = "stats.transmission";
    pub const STATS_SPECIFIC_TRANSMISSION: &str = "stats.specific_transmission";
    pub const STATS_AV_RATIO: &str = "stats.av_ratio";

    pub const N50_HEADING: &str = "n50.heading";
    pub const N50_VALUE: &str = "n50.value";
    pub const N50_BASIS_FALLBACK: &str = "n50.basis_fallback";
    pub const N50_BASIS_VOLUME: &str = "n50.basis_volume";
    pub const N50_BASIS_ENVELOPE: &str = "n50.basis_envelope";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_CLASSIFICATION: &str = "report.classification";
    pub const REPORT_NO_CARRIERS: &str = "report.no_carriers";

    pub const VALUE_NOT_AVAILABLE: &str = "value.not_available";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .or_else(|| std::env::var("LANG").ok())
        .and_then(|loc| {
            let lang = loc.split(['.', '_', '-']).next().unwrap_or_default();
            normalize_lang(lang)
        })
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        FACTORS_HEADING => "에너지원 계수",
        FACTORS_COLUMNS => "에너지원            PEF [-]   CO2 [kg/kWh]",
        STATS_HEADING => "건물 집계",
        STATS_TOTAL_VOLUME => "총 체적",
        STATS_ENVELOPE_AREA => "총 외피 면적",
        STATS_TRANSMISSION => "전열손실계수 H_T",
        STATS_SPECIFIC_TRANSMISSION => "비전열손실계수 H_T'",
        STATS_AV_RATIO => "A/V 비",
        N50_HEADING => "기밀성 표준값",
        N50_VALUE => "n50",
        N50_BASIS_FALLBACK => "체적이 0 이하라 기본값 사용 (실제 산정값 아님)",
        N50_BASIS_VOLUME => "소규모 건물 테이블값",
        N50_BASIS_ENVELOPE => "대규모 건물: q50 × A/V",
        REPORT_HEADING => "표준값 보고서",
        REPORT_CLASSIFICATION => "환기 방식 / 기밀성 등급",
        REPORT_NO_CARRIERS => "지정된 에너지원 없음",
        VALUE_NOT_AVAILABLE => "해당 없음",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        FACTORS_HEADING => "Energy carrier factors",
        FACTORS_COLUMNS => "carrier             PEF [-]   CO2 [kg/kWh]",
        STATS_HEADING => "Building aggregate",
        STATS_TOTAL_VOLUME => "Total volume",
        STATS_ENVELOPE_AREA => "Total envelope area",
        STATS_TRANSMISSION => "Transmission H_T",
        STATS_SPECIFIC_TRANSMISSION => "Specific transmission H_T'",
        STATS_AV_RATIO => "A/V ratio",
        N50_HEADING => "Standard air tightness",
        N50_VALUE => "n50",
        N50_BASIS_FALLBACK => "volume not positive, fallback used (not a computed value)",
        N50_BASIS_VOLUME => "small building table value",
        N50_BASIS_ENVELOPE => "large building: q50 × A/V",
        REPORT_HEADING => "Standard values report",
        REPORT_CLASSIFICATION => "Ventilation / tightness category",
        REPORT_NO_CARRIERS => "no energy carriers given",
        VALUE_NOT_AVAILABLE => "n/a",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en-US", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn english_falls_back_to_korean_for_unknown_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::STATS_TOTAL_VOLUME), "Total volume");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }
}
