use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("install-command").unwrap();
    cmd.env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_defaults_to_npm() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "foo", "-D", "-g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install --save-dev -g foo"));
}

#[test]
fn show_deno_splits_packages() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "-m", "deno", "jsr:@std/path", "npm:chalk", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "add jsr:@std/path npm:chalk npm:bar",
        ));
}

#[test]
fn show_jsr_registry_selects_deno() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "@std/path", "--registry", "jsr", "--range", "^1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add jsr:@std/path@^1.0.0"));
}

#[test]
fn show_override_is_verbatim() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "show",
            "foo",
            "-D",
            "--command",
            "npm=npm create vite@latest x",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("create vite@latest x"))
        .stdout(predicate::str::contains("--save-dev").not());
}

#[test]
fn show_unknown_manager_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "foo", "-m", "cargo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown package manager 'cargo'"));
}

#[test]
fn show_all_lists_every_manager() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "--all", "foo", "--tag", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install foo@beta"))
        .stdout(predicate::str::contains("Yarn"))
        .stdout(predicate::str::contains("add npm:foo@beta"));
}

#[test]
fn selection_is_remembered_with_local_storage() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["select", "bun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bun"));

    cmd(&home)
        .args(["show", "foo", "-D", "--storage", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add -d foo"));

    // Without durable storage the stored choice is ignored.
    cmd(&home)
        .args(["show", "foo", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install --save-dev foo"));
}

#[test]
fn detected_manager_is_remembered() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["show", "@std/path", "--registry", "jsr", "--storage", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deno add jsr:@std/path"));

    cmd(&home)
        .args(["show", "foo", "--storage", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deno add npm:foo"));
}

#[test]
fn copy_other_manager_keeps_selection() {
    let home = TempDir::new().unwrap();
    // The clipboard may be missing here, so only the stored choice matters.
    let _ = cmd(&home)
        .args(["copy", "foo", "-m", "pnpm", "--storage", "local"])
        .output()
        .unwrap();

    cmd(&home)
        .args(["show", "foo", "--storage", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm install foo"))
        .stdout(predicate::str::contains("pnpm").not());
}

#[test]
fn copy_unknown_manager_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["copy", "foo", "-m", "cargo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown package manager 'cargo'"));
}

#[test]
fn pick_without_terminal_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["pick", "foo"])
        .write_stdin("")
        .assert()
        .failure();
}

#[test]
fn config_set_and_get() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "set", "commands.pnpm", "pnpm create vite my-app"])
        .assert()
        .success();

    cmd(&home)
        .args(["config", "get", "commands.pnpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm create vite my-app"));

    // The override key also drives initial detection.
    cmd(&home)
        .args(["show", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create vite my-app"));
}

#[test]
fn config_rejects_unknown_order_entry() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "set", "managers.order", r#"["cargo"]"#])
        .assert()
        .failure();
}

#[test]
fn managers_table_lists_builtins() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("managers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deno"))
        .stdout(predicate::str::contains("pnpm add example"));
}

#[test]
fn catalog_renders_scenario() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("deno-multiple-packages"));

    cmd(&home)
        .args(["catalog", "custom-commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create vite@latest my-app"))
        .stdout(predicate::str::contains("add npm:"));
}

#[test]
fn catalog_unknown_scenario_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["catalog", "gradient-indicator"])
        .assert()
        .failure();
}
