use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rat_at, setup_test_db, test_config, work};

#[test]
fn test_worked_for_member_lists_total_and_details() {
    let db = setup_test_db("admin_worked_member");
    let cfg = test_config("admin_worked_member", None);

    work(&db, &cfg, "7", "2025-04-07 08:00:00", "2025-04-07 09:02:00"); // 60
    work(&db, &cfg, "7", "2025-04-07 10:00:00", "2025-04-07 10:01:00"); // 0
    work(&db, &cfg, "7", "2025-04-07 11:00:00", "2025-04-07 11:08:00"); // 10

    rat_at(&db, &cfg, "2025-04-07 18:00:00")
        .args(["worked", "7"])
        .assert()
        .success()
        .stdout(contains("Total: 70 minutes"))
        .stdout(contains("08:00:00"))
        .stdout(contains("11:08:00"))
        .stdout(contains("10:01:00").not());
}

#[test]
fn test_worked_for_everybody_skips_zero_totals() {
    let db = setup_test_db("admin_worked_all");
    let cfg = test_config("admin_worked_all", None);

    work(&db, &cfg, "1", "2025-04-07 08:00:00", "2025-04-07 08:30:00");
    work(&db, &cfg, "2", "2025-04-07 08:00:00", "2025-04-07 08:01:00");

    rat_at(&db, &cfg, "2025-04-08 09:00:00")
        .args(["worked", "--date", "2025-04-07", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("date,user_id,total_minutes"))
        .stdout(contains("2025-04-07,1,30"))
        .stdout(contains("2025-04-07,2,").not());
}

#[test]
fn test_worked_json_output() {
    let db = setup_test_db("admin_worked_json");
    let cfg = test_config("admin_worked_json", None);

    work(&db, &cfg, "3", "2025-04-07 08:00:00", "2025-04-07 09:00:00");

    let out = rat_at(&db, &cfg, "2025-04-07 18:00:00")
        .args(["worked", "3", "--format", "json"])
        .output()
        .expect("failed to run worked");
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(report["date"], "2025-04-07");
    assert_eq!(report["totals"][0]["user_id"], 3);
    assert_eq!(report["totals"][0]["total_minutes"], 60);
    assert_eq!(report["totals"][0]["details"][0]["index"], 1);
}

#[test]
fn test_worked_without_records() {
    let db = setup_test_db("admin_worked_none");
    let cfg = test_config("admin_worked_none", None);

    rat_at(&db, &cfg, "2025-04-07 18:00:00")
        .args(["worked"])
        .assert()
        .success()
        .stdout(contains("No records found for 2025-04-07"));
}

#[test]
fn test_rmv_by_index() {
    let db = setup_test_db("admin_rmv");
    let cfg = test_config("admin_rmv", None);

    work(&db, &cfg, "5", "2025-04-07 08:00:00", "2025-04-07 09:00:00");
    work(&db, &cfg, "5", "2025-04-07 10:00:00", "2025-04-07 11:00:00");

    for bad in ["0", "3", "-1"] {
        rat_at(&db, &cfg, "2025-04-07 12:00:00")
            .args(["rmv", "5", "2025-04-07", bad])
            .assert()
            .code(2)
            .stderr(contains("Invalid index"));
    }

    rat_at(&db, &cfg, "2025-04-07 12:00:00")
        .args(["rmv", "5", "2025-04-07", "1"])
        .assert()
        .success()
        .stdout(contains("at index 1"));

    rat_at(&db, &cfg, "2025-04-07 12:00:00")
        .args(["sessions", "5", "2025-04-07"])
        .assert()
        .success()
        .stdout(contains("10:00:00"))
        .stdout(contains("08:00:00").not());

    rat_at(&db, &cfg, "2025-04-07 12:00:00")
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Removed session #1"));
}

#[test]
fn test_addminutes_closes_open_session() {
    let db = setup_test_db("admin_addminutes_open");
    let cfg = test_config("admin_addminutes_open", None);

    rat_at(&db, &cfg, "2025-04-07 09:15:00")
        .args(["--actor", "9", "clockin"])
        .assert()
        .success();

    rat_at(&db, &cfg, "2025-04-07 20:00:00")
        .args(["addminutes", "9", "2025-04-07", "45"])
        .assert()
        .success()
        .stdout(contains("09:15:00 - 10:00:00"));

    rat_at(&db, &cfg, "2025-04-07 20:00:00")
        .args(["worked", "9"])
        .assert()
        .success()
        .stdout(contains("Total: 45 minutes"));
}

#[test]
fn test_addminutes_synthesizes_session_from_midnight() {
    let db = setup_test_db("admin_addminutes_new");
    let cfg = test_config("admin_addminutes_new", None);

    rat_at(&db, &cfg, "2025-04-08 10:00:00")
        .args(["addminutes", "9", "2025-04-07", "90"])
        .assert()
        .success()
        .stdout(contains("00:00:00 - 01:30:00"));
}

#[test]
fn test_ongoing_list_and_stop() {
    let db = setup_test_db("admin_ongoing");
    let cfg = test_config("admin_ongoing", None);

    rat_at(&db, &cfg, "2025-04-07 08:00:00")
        .args(["--actor", "21", "clockin"])
        .assert()
        .success();
    rat_at(&db, &cfg, "2025-04-07 08:10:00")
        .args(["--actor", "22", "clockin"])
        .assert()
        .success();

    rat_at(&db, &cfg, "2025-04-07 09:00:00")
        .args(["ongoing"])
        .assert()
        .success()
        .stdout(contains("21 - Clocked in at 08:00:00"))
        .stdout(contains("22 - Clocked in at 08:10:00"));

    rat_at(&db, &cfg, "2025-04-07 09:00:00")
        .args(["ongoing", "21", "--stop"])
        .assert()
        .success()
        .stdout(contains("Stopped and removed clock-in"));

    rat_at(&db, &cfg, "2025-04-07 09:00:00")
        .args(["ongoing"])
        .assert()
        .success()
        .stdout(contains("21 -").not())
        .stdout(contains("22 - Clocked in"));

    rat_at(&db, &cfg, "2025-04-07 09:00:00")
        .args(["ongoing", "21", "--stop"])
        .assert()
        .code(2);
}

#[test]
fn test_addminutes_rejects_amounts_beyond_range() {
    let db = setup_test_db("admin_addminutes_huge");
    let cfg = test_config("admin_addminutes_huge", None);

    rat_at(&db, &cfg, "2025-08-01 10:00:00")
        .args(["addminutes", "3", "2025-08-01", "9223372036854775807"])
        .assert()
        .code(1)
        .stderr(contains("out of range"));

    rat_at(&db, &cfg, "2025-08-01 10:00:00")
        .args(["sessions", "3", "2025-08-01"])
        .assert()
        .success()
        .stdout(contains("No sessions"));
}

#[test]
fn test_rmv_removes_one_of_two_midnight_corrections() {
    let db = setup_test_db("admin_rmv_twins");
    let cfg = test_config("admin_rmv_twins", None);

    for minutes in ["30", "60"] {
        rat_at(&db, &cfg, "2025-08-02 10:00:00")
            .args(["addminutes", "3", "2025-08-01", minutes])
            .assert()
            .success();
    }

    rat_at(&db, &cfg, "2025-08-02 10:00:00")
        .args(["rmv", "3", "2025-08-01", "1"])
        .assert()
        .success();

    rat_at(&db, &cfg, "2025-08-02 10:00:00")
        .args(["worked", "3", "--date", "2025-08-01"])
        .assert()
        .success()
        .stdout(contains("Total: 60 minutes"));
}
