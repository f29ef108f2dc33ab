#![allow(dead_code)]
use workflow_commands::{Toolkit, WorkflowLogger};

pub fn logger_init() {
    let _ = WorkflowLogger::init(log::LevelFilter::Debug);
}

/// Run `f` with a [`Toolkit`] that writes to a buffer, then return what was written.
pub fn capture(f: impl FnOnce(&mut Toolkit<Vec<u8>>)) -> String {
    let mut toolkit = Toolkit::new(Vec::new());
    f(&mut toolkit);
    String::from_utf8(toolkit.into_inner()).unwrap()
}
