use std::env;

mod common;
use common::{capture, logger_init};

const SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

#[test]
fn set_env() {
    logger_init();
    const VAR_NAME: &str = "WORKFLOW_COMMANDS_TEST_ENV_VAR";
    assert!(env::var(VAR_NAME).is_err());

    let out = capture(|tk| {
        tk.set_env(VAR_NAME, "testvalue").unwrap();
    });
    assert_eq!(out, format!("::set-env name={VAR_NAME}::testvalue\n"));
    assert_eq!(env::var(VAR_NAME).unwrap(), "testvalue");
    unsafe {
        env::remove_var(VAR_NAME);
    }
}

// Both cases live in one test because they mutate the same env var.
#[test]
fn prepend_path() {
    logger_init();
    let old_path = env::var("PATH").unwrap_or_default();

    let out = capture(|tk| {
        tk.prepend_path("/usr/dummy/bin").unwrap();
    });
    let new_path = env::var("PATH").unwrap();
    assert_eq!(out, "::add-path::/usr/dummy/bin\n");
    assert_eq!(new_path, format!("/usr/dummy/bin{SEPARATOR}{old_path}"));

    // the entry is prepended verbatim, even if it holds a list separator
    let entry = format!("/opt/a{SEPARATOR}b");
    let out = capture(|tk| {
        tk.prepend_path(&entry).unwrap();
    });
    let newer_path = env::var("PATH").unwrap();
    unsafe {
        env::set_var("PATH", &old_path);
    }
    assert_eq!(out, format!("::add-path::{entry}\n"));
    assert_eq!(newer_path, format!("{entry}{SEPARATOR}{new_path}"));
}
