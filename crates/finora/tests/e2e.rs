//! End-to-end CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn finora() -> Command {
    let mut cmd = Command::cargo_bin("finora").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("FINORA_TAB")
        .env_remove("FINORA_FIXTURES")
        .env_remove("FINORA_LATENCY_MS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    finora()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn version_flag() {
    finora()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("finora"));
}

#[test]
fn default_overview() {
    finora()
        .assert()
        .success()
        .stdout(predicate::str::contains("Finora · Max Mustermann"))
        .stdout(predicate::str::contains("[Übersicht]"))
        .stdout(predicate::str::contains("Gesamtvermögen"))
        .stdout(predicate::str::contains("17.840,82"))
        .stdout(predicate::str::contains("Kontenübersicht"));
}

#[test]
fn quiet_drops_header() {
    finora()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gesamtvermögen"))
        .stdout(predicate::str::contains("Max Mustermann").not());
}

#[test]
fn accounts_tab() {
    finora()
        .args(["--tab", "accounts", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Konten"))
        .stdout(predicate::str::contains("Kredite"))
        .stdout(predicate::str::contains("-450,25"));
}

#[test]
fn contracts_tab() {
    finora()
        .args(["--tab", "contracts", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keine Verträge vorhanden"));
}

#[test]
fn tab_from_env() {
    finora()
        .env("FINORA_TAB", "contracts")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 Verträge"));
}

#[test]
fn unknown_tab_exits_4() {
    finora()
        .args(["--tab", "settings"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("settings"));
}

#[test]
fn unlinked_shows_onboarding() {
    finora()
        .args(["--unlinked", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Willkommen bei Finora!"))
        .stdout(predicate::str::contains("Bankkonto verbinden"));
}

#[test]
fn unlinked_then_connect_loads_accounts() {
    finora()
        .args(["--unlinked", "--connect", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17.840,82"))
        .stdout(predicate::str::contains("Willkommen").not());
}

#[test]
fn offline_provider_fails() {
    finora()
        .args(["--offline", "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Fehler beim Laden der Daten"));
}

#[test]
fn json_output() {
    let output = finora()
        .args(["--json", "--tab", "accounts"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["state"]["activeTab"], "accounts");
    assert_eq!(value["state"]["loading"], false);
    assert_eq!(value["screen"]["kind"], "accounts");
    assert_eq!(value["state"]["aggregate"]["accounts"].as_array().unwrap().len(), 3);
    assert!(value["transactions"].is_null());
}

#[test]
fn transactions_listing() {
    finora()
        .args(["--transactions", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Umsätze"))
        .stdout(predicate::str::contains("Supermarkt"))
        .stdout(predicate::str::contains("1.250,00"));
}

#[test]
fn fixture_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "user": {{"firstName": "Erika", "lastName": "Musterfrau", "email": "erika@example.com"}},
            "accounts": [
                {{"id": "a", "name": "Tagesgeld", "mask": "4242", "type": "depository", "subtype": "savings",
                  "balances": {{"available": 1234.5, "current": 1234.5, "iso_currency_code": "EUR"}}}}
            ],
            "monthlyIncome": 100,
            "monthlyExpenses": 40
        }}"#
    )
    .unwrap();

    finora()
        .arg("--fixtures")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Erika Musterfrau"))
        .stdout(predicate::str::contains("1.234,50"))
        .stdout(predicate::str::contains("Sparkonto"));
}

#[test]
fn missing_fixture_file_exits_4() {
    finora()
        .args(["--fixtures", "/nonexistent/finora-fixtures.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("fixture file not found"));
}

#[test]
fn slow_provider_times_out() {
    finora()
        .args(["--latency-ms", "2000", "--timeout", "100ms", "-q"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn invalid_timeout_exits_4() {
    finora()
        .args(["--timeout", "forever"])
        .assert()
        .code(4);
}

#[test]
fn completion_bash() {
    finora()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finora"));
}

#[test]
fn json_conflicts_with_tui() {
    finora().args(["--json", "--tui"]).assert().failure();
}
