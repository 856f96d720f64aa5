//! DIN V 18599-2 기준 건물 기밀성(n50) 표준값 산정 모듈 모음.

pub mod category;
pub mod n50;

pub use category::*;
pub use n50::*;

/// 기밀성 산정 입력/테이블 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InfiltrationError {
    /// 닫힌 열거형에 없는 값
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),
    /// 설정에서 읽은 테이블 값이 잘못된 경우
    #[error("기밀성 테이블 오류: {0}")]
    InvalidTable(String),
}
