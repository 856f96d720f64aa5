//! DIN V 18599 표준값 계산 로직을 라이브러리로 분리하여 CLI 외의 보고 계층에서도 그대로 쓴다.

pub mod app;
pub mod building;
pub mod carrier;
pub mod config;
pub mod i18n;
pub mod infiltration;
pub mod logging;
pub mod project;
pub mod report;
pub mod ui_cli;
pub mod usage_profile;
