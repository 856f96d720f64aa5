//! 존/외피 레코드로부터 건물 체적과 외피 면적을 집계하는 모듈 모음.

pub mod aggregate;
pub mod zone;

pub use aggregate::*;
pub use zone::*;
