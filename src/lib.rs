//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산기를 공유한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod hsu;
pub mod i18n;
pub mod ui_cli;
pub mod units;
