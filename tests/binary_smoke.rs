use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn binary_print_config_succeeds() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    let out = Command::new(assert_cmd::cargo::cargo_bin!("swap-names"))
        .env("SWAP_NAMES_CONFIG", &cfg)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("SWAP_NAMES_CONFIG"), "{text}");
    assert!(!cfg.exists(), "--print-config must not create a file");
}

#[test]
fn binary_init_config_writes_template_once() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("sub").join("config.xml");

    let first = Command::new(assert_cmd::cargo::cargo_bin!("swap-names"))
        .env("SWAP_NAMES_CONFIG", &cfg)
        .arg("--init-config")
        .output()
        .expect("spawn binary");
    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
    let xml = fs::read_to_string(&cfg).unwrap();
    assert!(xml.contains("<overwrite>ask</overwrite>"), "{xml}");

    let second = Command::new(assert_cmd::cargo::cargo_bin!("swap-names"))
        .env("SWAP_NAMES_CONFIG", &cfg)
        .arg("--init-config")
        .output()
        .expect("spawn binary");
    assert_eq!(second.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
}

#[test]
fn binary_version_flag() {
    let out = Command::new(assert_cmd::cargo::cargo_bin!("swap-names"))
        .arg("--version")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("swap-names"));
}
