use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";

    pub const SECTION_INPUTS: &str = "section.inputs";
    pub const SECTION_PUMP: &str = "section.pump";
    pub const SECTION_MOTOR: &str = "section.motor";
    pub const SECTION_DELTA: &str = "section.delta";
    pub const SECTION_CHARGE_PUMP: &str = "section.charge_pump";
    pub const SECTION_EFFICIENCY: &str = "section.efficiency";
    pub const SECTION_LEAKAGE: &str = "section.leakage";
    pub const SECTION_OIL: &str = "section.oil";
    pub const SECTION_LOADS: &str = "section.loads";
    pub const SECTION_SIZES: &str = "section.sizes";
    pub const SECTION_OILS: &str = "section.oils";

    pub const INPUT_OIL: &str = "input.oil";
    pub const INPUT_TEMPERATURE: &str = "input.temperature";
    pub const INPUT_SPEED: &str = "input.speed";
    pub const INPUT_CHARGE: &str = "input.charge";
    pub const INPUT_DISCHARGE: &str = "input.discharge";
    pub const INPUT_DIFFERENTIAL: &str = "input.differential";

    pub const RESULT_SPEED: &str = "result.speed";
    pub const RESULT_TORQUE: &str = "result.torque";
    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_VOLUMETRIC: &str = "result.volumetric";
    pub const RESULT_MECHANICAL: &str = "result.mechanical";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const RESULT_CONTINUOUS: &str = "result.continuous";
    pub const RESULT_CONTROL: &str = "result.control";
    pub const RESULT_TRANSIENT: &str = "result.transient";
    pub const RESULT_BLOCK: &str = "result.block";
    pub const RESULT_SHOES: &str = "result.shoes";
    pub const RESULT_PISTONS: &str = "result.pistons";
    pub const RESULT_VISCOSITY: &str = "result.viscosity";
    pub const RESULT_DENSITY: &str = "result.density";
    pub const RESULT_RANGE: &str = "result.range";

    pub const COLUMN_PUMP: &str = "column.pump";
    pub const COLUMN_MOTOR: &str = "column.motor";
    pub const COLUMN_HSU: &str = "column.hsu";

    pub const ACTION_EXPORT: &str = "action.export";
    pub const STATUS_EXPORTED: &str = "status.exported";
    pub const STATUS_NO_RESULT: &str = "status.no_result";

    pub const HELP_TEMPERATURE: &str = "help.temperature";
    pub const HELP_CHARGE: &str = "help.charge";
    pub const HELP_EFFICIENCY: &str = "help.efficiency";

    pub const SIZE_PISTON_DIAMETER: &str = "size.piston_diameter";
    pub const SIZE_PISTON_AREA: &str = "size.piston_area";
    pub const SIZE_PITCH_DIAMETER: &str = "size.pitch_diameter";
    pub const SIZE_STROKE: &str = "size.stroke";
    pub const SIZE_MIN_ENGAGEMENT: &str = "size.min_engagement";
    pub const SIZE_KIDNEY_WIDTH: &str = "size.kidney_width";
    pub const SIZE_LAND_WIDTH: &str = "size.land_width";
    pub const SIZE_OUTER_LAND_OUTER: &str = "size.outer_land_outer";
    pub const SIZE_OUTER_LAND_INNER: &str = "size.outer_land_inner";
    pub const SIZE_INNER_LAND_OUTER: &str = "size.inner_land_outer";
    pub const SIZE_INNER_LAND_INNER: &str = "size.inner_land_inner";
    pub const SIZE_SHOE_OUTER: &str = "size.shoe_outer";
    pub const SIZE_SHOE_INNER: &str = "size.shoe_inner";
    pub const SIZE_SWEPT_VOLUME: &str = "size.swept_volume";
    pub const SIZE_DESIGN: &str = "size.design";

    pub const LOAD_SHAFT_RADIAL: &str = "load.shaft_radial";
    pub const LOAD_SWASH_HP_AXIAL: &str = "load.swash_hp_axial";
    pub const LOAD_SWASH_LP_AXIAL: &str = "load.swash_lp_axial";
    pub const LOAD_SWASH_HP_NORMAL: &str = "load.swash_hp_normal";
    pub const LOAD_SWASH_LP_NORMAL: &str = "load.swash_lp_normal";
    pub const LOAD_MOTOR_HP: &str = "load.motor_hp";
    pub const LOAD_MOTOR_LP: &str = "load.motor_lp";
    pub const LOAD_SHAFT_TORQUE: &str = "load.shaft_torque";
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

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)의 문자열로 내장 문자열을 덮어쓴다.
    /// 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &Path) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let s = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        s.map(str::to_string).unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
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

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 `a.b` 형식의 플랫 맵으로 펼친다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "HSU 성능 계산기",
        SECTION_INPUTS => "운전 조건",
        SECTION_PUMP => "펌프",
        SECTION_MOTOR => "모터",
        SECTION_DELTA => "손실(펌프 - 모터)",
        SECTION_CHARGE_PUMP => "차지 펌프",
        SECTION_EFFICIENCY => "효율",
        SECTION_LEAKAGE => "누설(기계 1대)",
        SECTION_OIL => "오일 물성",
        SECTION_LOADS => "구조 하중",
        SECTION_SIZES => "펌핑 그룹 치수",
        SECTION_OILS => "오일 목록",
        INPUT_OIL => "오일",
        INPUT_TEMPERATURE => "오일 온도",
        INPUT_SPEED => "펌프 회전수",
        INPUT_CHARGE => "차지 압력",
        INPUT_DISCHARGE => "토출 압력",
        INPUT_DIFFERENTIAL => "차압",
        RESULT_SPEED => "회전수",
        RESULT_TORQUE => "토크",
        RESULT_POWER => "동력",
        RESULT_VOLUMETRIC => "체적 효율",
        RESULT_MECHANICAL => "기계 효율",
        RESULT_TOTAL => "전체 효율",
        RESULT_CONTINUOUS => "연속 보충 유량",
        RESULT_CONTROL => "제어 유량",
        RESULT_TRANSIENT => "과도 최대 유량",
        RESULT_BLOCK => "실린더 블록",
        RESULT_SHOES => "슈",
        RESULT_PISTONS => "피스톤",
        RESULT_VISCOSITY => "점도",
        RESULT_DENSITY => "밀도",
        RESULT_RANGE => "유효 온도 범위",
        COLUMN_PUMP => "펌프",
        COLUMN_MOTOR => "모터",
        COLUMN_HSU => "HSU",
        ACTION_EXPORT => "결과 내보내기(TOML)",
        STATUS_EXPORTED => "저장 완료:",
        STATUS_NO_RESULT => "계산 결과가 없습니다.",
        HELP_TEMPERATURE => "오일 물성표 범위(0~100 °C) 안에서만 계산합니다.",
        HELP_CHARGE => "저압측 보충 압력. 토출 압력보다 클 수 없습니다.",
        HELP_EFFICIENCY => "체적 효율은 누설과 압축성, 기계 효율은 점성/마찰 손실을 반영합니다.",
        SIZE_PISTON_DIAMETER => "피스톤 직경",
        SIZE_PISTON_AREA => "피스톤 단면적",
        SIZE_PITCH_DIAMETER => "피치원 직경",
        SIZE_STROKE => "행정",
        SIZE_MIN_ENGAGEMENT => "최소 끼움 길이",
        SIZE_KIDNEY_WIDTH => "키드니 폭",
        SIZE_LAND_WIDTH => "랜드 폭",
        SIZE_OUTER_LAND_OUTER => "외측 랜드 R_bo",
        SIZE_OUTER_LAND_INNER => "외측 랜드 r_bo",
        SIZE_INNER_LAND_OUTER => "내측 랜드 R_bi",
        SIZE_INNER_LAND_INNER => "내측 랜드 r_bi",
        SIZE_SHOE_OUTER => "슈 R_s",
        SIZE_SHOE_INNER => "슈 r_s",
        SIZE_SWEPT_VOLUME => "행정 체적",
        SIZE_DESIGN => "설계값",
        LOAD_SHAFT_RADIAL => "축 반경 하중",
        LOAD_SWASH_HP_AXIAL => "사판 고압측 축방향",
        LOAD_SWASH_LP_AXIAL => "사판 저압측 축방향",
        LOAD_SWASH_HP_NORMAL => "사판 고압측 수직",
        LOAD_SWASH_LP_NORMAL => "사판 저압측 수직",
        LOAD_MOTOR_HP => "모터 고압측",
        LOAD_MOTOR_LP => "모터 저압측",
        LOAD_SHAFT_TORQUE => "축 토크",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "HSU Performance Calculator",
        SECTION_INPUTS => "Operating conditions",
        SECTION_PUMP => "Pump",
        SECTION_MOTOR => "Motor",
        SECTION_DELTA => "Losses (pump - motor)",
        SECTION_CHARGE_PUMP => "Charge pump",
        SECTION_EFFICIENCY => "Efficiency",
        SECTION_LEAKAGE => "Leakage (per machine)",
        SECTION_OIL => "Oil properties",
        SECTION_LOADS => "Structural loads",
        SECTION_SIZES => "Pumping group geometry",
        SECTION_OILS => "Available oils",
        INPUT_OIL => "Oil",
        INPUT_TEMPERATURE => "Oil temperature",
        INPUT_SPEED => "Pump speed",
        INPUT_CHARGE => "Charge pressure",
        INPUT_DISCHARGE => "Discharge pressure",
        INPUT_DIFFERENTIAL => "Differential pressure",
        RESULT_SPEED => "Speed",
        RESULT_TORQUE => "Torque",
        RESULT_POWER => "Power",
        RESULT_VOLUMETRIC => "Volumetric efficiency",
        RESULT_MECHANICAL => "Mechanical efficiency",
        RESULT_TOTAL => "Total efficiency",
        RESULT_CONTINUOUS => "Continuous make-up flow",
        RESULT_CONTROL => "Control flow",
        RESULT_TRANSIENT => "Transient peak flow",
        RESULT_BLOCK => "Cylinder block",
        RESULT_SHOES => "Shoes",
        RESULT_PISTONS => "Pistons",
        RESULT_VISCOSITY => "Viscosity",
        RESULT_DENSITY => "Density",
        RESULT_RANGE => "Valid temperature range",
        COLUMN_PUMP => "Pump",
        COLUMN_MOTOR => "Motor",
        COLUMN_HSU => "HSU",
        ACTION_EXPORT => "Export result (TOML)",
        STATUS_EXPORTED => "Saved:",
        STATUS_NO_RESULT => "No result to show.",
        HELP_TEMPERATURE => "Only temperatures inside the oil table (0-100 °C) are computed.",
        HELP_CHARGE => "Low-side boost pressure. Must not exceed the discharge pressure.",
        HELP_EFFICIENCY => "Volumetric efficiency covers leakage and compressibility; mechanical efficiency covers viscous and friction losses.",
        SIZE_PISTON_DIAMETER => "Piston diameter",
        SIZE_PISTON_AREA => "Piston area",
        SIZE_PITCH_DIAMETER => "Pitch circle diameter",
        SIZE_STROKE => "Stroke",
        SIZE_MIN_ENGAGEMENT => "Min. engagement",
        SIZE_KIDNEY_WIDTH => "Kidney width",
        SIZE_LAND_WIDTH => "Land width",
        SIZE_OUTER_LAND_OUTER => "Outer land R_bo",
        SIZE_OUTER_LAND_INNER => "Outer land r_bo",
        SIZE_INNER_LAND_OUTER => "Inner land R_bi",
        SIZE_INNER_LAND_INNER => "Inner land r_bi",
        SIZE_SHOE_OUTER => "Shoe R_s",
        SIZE_SHOE_INNER => "Shoe r_s",
        SIZE_SWEPT_VOLUME => "Swept volume",
        SIZE_DESIGN => "design",
        LOAD_SHAFT_RADIAL => "Shaft radial",
        LOAD_SWASH_HP_AXIAL => "Swash plate HP axial",
        LOAD_SWASH_LP_AXIAL => "Swash plate LP axial",
        LOAD_SWASH_HP_NORMAL => "Swash plate HP normal",
        LOAD_SWASH_LP_NORMAL => "Swash plate LP normal",
        LOAD_MOTOR_HP => "Motor HP",
        LOAD_MOTOR_LP => "Motor LP",
        LOAD_SHAFT_TORQUE => "Shaft torque",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(resolve_language(Some("en-GB"), "ko"), "en");
        assert_eq!(resolve_language(Some("auto"), "ko"), "ko");
        assert_eq!(resolve_language(None, "ko_KR.UTF-8"), "ko");
    }

    #[test]
    fn english_falls_back_to_key_for_unknown() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::SECTION_PUMP), "Pump");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(Translator::new("fr").language(), Language::Ko);
    }

    #[test]
    fn every_korean_key_has_english_text() {
        use keys::*;
        for key in [
            ERROR_PREFIX,
            APP_TITLE,
            SECTION_CHARGE_PUMP,
            RESULT_TRANSIENT,
            ACTION_EXPORT,
            HELP_EFFICIENCY,
            SIZE_PISTON_DIAMETER,
            SIZE_SHOE_INNER,
            SIZE_SWEPT_VOLUME,
            SIZE_DESIGN,
            LOAD_SHAFT_RADIAL,
            LOAD_SWASH_LP_NORMAL,
            LOAD_MOTOR_LP,
            LOAD_SHAFT_TORQUE,
        ] {
            assert!(ko(key).is_some() && en(key).is_some(), "{key}");
        }
    }

    #[test]
    fn nested_pack_is_flattened() {
        let map = parse_toml_to_map("[section]\npump = \"Pumpe\"\n").unwrap();
        assert_eq!(map.get("section.pump").map(String::as_str), Some("Pumpe"));
    }
}
