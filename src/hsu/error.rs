use thiserror::Error;

/// HSU 성능 계산 중 발생 가능한 오류.
///
/// 입력 오류(`InvalidInput`, `UnknownOil`, `OutOfRange`)와 모델 오류(`Model`)를
/// 구분해, 호출 측이 "입력을 고쳐라"와 "버그를 보고하라"를 나눠 처리할 수 있게 한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HsuError {
    /// 입력값이 유효 범위를 벗어남
    #[error("입력 오류: {what}")]
    InvalidInput { what: &'static str },

    /// 등록되지 않은 오일 이름
    #[error("알 수 없는 오일: {0}")]
    UnknownOil(String),

    /// 값이 허용 구간 밖에 있음. 값과 경계는 `quantity`의 기준 단위다.
    #[error("범위를 벗어남: {what} = {value} {unit} (허용 {min} ~ {max} {unit})", unit = .quantity.base_unit())]
    OutOfRange {
        what: &'static str,
        quantity: Quantity,
        value: f64,
        min: f64,
        max: f64,
    },

    /// 효율 계산 결과가 (0, 1] 밖에 있음
    #[error("모델 오류: {what} = {value}")]
    Model { what: &'static str, value: f64 },
}

impl HsuError {
    /// 사용자가 입력을 수정해야 하는 오류인지 여부.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HsuError::InvalidInput { .. } | HsuError::UnknownOil(_) | HsuError::OutOfRange { .. }
        )
    }

    pub fn is_model_error(&self) -> bool {
        matches!(self, HsuError::Model { .. })
    }
}

/// 범위 검사 대상의 물리량. 단위 환산이 필요한 호출 측이 구분하는 데 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Pressure,
    Speed,
}

impl Quantity {
    /// 라이브러리 내부 기준 단위
    pub fn base_unit(&self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Pressure => "bar",
            Quantity::Speed => "rpm",
        }
    }
}

pub type HsuResult<T> = Result<T, HsuError>;
