use predicates::str::contains;

mod common;
use common::{rat_at, setup_test_db, test_config};

const NOW: &str = "2025-05-01 12:00:00";

#[test]
fn test_warnings_count_up_to_limit() {
    let db = setup_test_db("warn_limit");
    let cfg = test_config("warn_limit", None);

    for n in 1..=5 {
        rat_at(&db, &cfg, NOW)
            .args(["warn", "33"])
            .assert()
            .success()
            .stdout(contains(format!("now has {}/5 warning(s)", n)));
    }

    rat_at(&db, &cfg, NOW)
        .args(["warn", "33"])
        .assert()
        .code(2)
        .stderr(contains("Warning limit reached (5/5)"));

    rat_at(&db, &cfg, NOW)
        .args(["warn", "33", "--show"])
        .assert()
        .success()
        .stdout(contains("5/5"));
}

#[test]
fn test_warning_reset() {
    let db = setup_test_db("warn_reset");
    let cfg = test_config("warn_reset", None);

    rat_at(&db, &cfg, NOW).args(["warn", "33"]).assert().success();
    rat_at(&db, &cfg, NOW).args(["warn", "33"]).assert().success();

    rat_at(&db, &cfg, NOW)
        .args(["warn", "33", "--reset"])
        .assert()
        .success()
        .stdout(contains("reset to 0/5"));

    rat_at(&db, &cfg, NOW)
        .args(["warn", "33"])
        .assert()
        .success()
        .stdout(contains("now has 1/5"));
}

#[test]
fn test_configured_limit() {
    let db = setup_test_db("warn_custom_limit");
    let cfg = test_config("warn_custom_limit", Some("max_warnings: 2\n"));

    rat_at(&db, &cfg, NOW).args(["warn", "4"]).assert().success();
    rat_at(&db, &cfg, NOW)
        .args(["warn", "4"])
        .assert()
        .success()
        .stdout(contains("2/2"));
    rat_at(&db, &cfg, NOW).args(["warn", "4"]).assert().code(2);
}
