use config::Config;

use rust_school_system::config::AppConfig;
use rust_school_system::runtime::lifetime::startup::prepare_server_startup;

#[tokio::test]
async fn startup_wires_services_over_fresh_store() {
    let builder = Config::builder()
        .set_override("database.url", ":memory:")
        .unwrap()
        .set_override("database.pool_size", 1)
        .unwrap();
    let config = AppConfig::from_builder(builder).unwrap();

    let startup = prepare_server_startup(&config).await;
    let services = startup.services;

    assert!(services.teachers.list_all_teachers().await.unwrap().is_empty());
    assert!(services.courses.list_all_courses().await.unwrap().is_empty());
    assert!(services.students.list_all_students().await.unwrap().is_empty());

    // 同一进程内再次启动不会因 rustls provider 已安装而失败
    let again = prepare_server_startup(&config).await;
    assert!(again.services.enrollments.list_all_enrollments().await.unwrap().is_empty());
}
