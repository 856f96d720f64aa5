//! `tracing` 구독자 초기화. 로그는 표준 오류로 내보내 표준 출력의 결과와 섞이지 않게 한다.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// `-v` 횟수에 맞춰 로그 수준을 정한다. `RUST_LOG`가 설정되어 있으면 그 값을 따른다.
///
/// 여러 번 호출해도 첫 호출만 적용된다.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("building_energy_toolbox={level}")));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .ok();
    });
}
