//! 로그 초기화가 이미 설치된 전역 구독자와 충돌하지 않는지 확인한다.
use building_energy_toolbox::logging;

#[test]
fn init_tolerates_existing_global_subscriber() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    logging::init(2);
    logging::init(0);
    tracing::info!("still logging");
}
