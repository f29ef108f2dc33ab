use workflow_commands::{Annotation, OutputVariable, Toolkit};
mod common;
use common::{capture, logger_init};

#[test]
fn set_output() {
    logger_init();
    let out = capture(|tk| {
        tk.set_output("testkey", "testvalue").unwrap();
    });
    assert_eq!(out, "::set-output name=testkey::testvalue\n");
}

#[test]
fn set_output_is_not_escaped() {
    let out = capture(|tk| {
        tk.set_outputs(&[OutputVariable::new("k", "a\r\nb")]).unwrap();
    });
    assert_eq!(out, "::set-output name=k::a\r\nb\n");
}

#[test]
fn set_secret() {
    let out = capture(|tk| {
        tk.set_secret("supersecret").unwrap();
    });
    assert_eq!(out, "::add-mask::supersecret\n");
}

#[test]
fn annotations() {
    let out = capture(|tk| {
        tk.error("hello world").unwrap();
        tk.warning("hello world").unwrap();
        tk.debug("hello world").unwrap();
    });
    assert_eq!(
        out,
        "::error::hello world\n::warning::hello world\n::debug::hello world\n"
    );
}

#[test]
fn annotate_with_location() {
    let annotation = Annotation::error("multi\nline")
        .file("src/main.rs")
        .line(12)
        .col(0);
    let mut toolkit = Toolkit::new(Vec::new());
    let written = toolkit.annotate(&annotation).unwrap();
    let expected = "::error file=src/main.rs,line=12::multi%0Aline\n";
    assert_eq!(written, expected.len());
    assert_eq!(String::from_utf8(toolkit.into_inner()).unwrap(), expected);
}

#[test]
fn groups() {
    let out = capture(|tk| {
        tk.start_group("hello world").unwrap();
        tk.end_group().unwrap();
    });
    assert_eq!(out, "::group name=hello world\n::endgroup\n");
}

#[test]
fn stop_and_resume_commands() {
    let out = capture(|tk| {
        tk.stop_commands("EOF").unwrap();
        tk.set_output("ignored", "by the runner").unwrap();
        tk.resume_commands("EOF").unwrap();
    });
    assert_eq!(
        out,
        "::stop-commands::EOF\n::set-output name=ignored::by the runner\n::EOF::\n"
    );
}

#[test]
fn token_with_spaces() {
    let out = capture(|tk| {
        tk.stop_commands("hello world").unwrap();
        tk.resume_commands("hello world").unwrap();
    });
    assert_eq!(out, "::stop-commands::hello world\n::hello world::\n");
}
