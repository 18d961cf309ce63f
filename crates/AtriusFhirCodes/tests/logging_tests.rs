use std::io;
use std::sync::{Arc, Mutex};

use atrius_fhir_codes::r4::{EncounterStatus, EncounterStatusCode};
use tracing::Level;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: Level, f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn rejected_codes_are_logged_at_debug() {
    let output = capture(Level::DEBUG, || {
        assert!(EncounterStatusCode::parse("bogus-status").is_err());
    });
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("rejected unknown code"), "{output}");
    assert!(output.contains("EncounterStatus"), "{output}");
    assert!(output.contains("bogus-status"), "{output}");
}

#[test]
fn accepted_codes_log_nothing() {
    let output = capture(Level::TRACE, || {
        assert!(EncounterStatusCode::parse("planned").is_ok());
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn permissive_builds_are_logged_at_trace() {
    let output = capture(Level::TRACE, || {
        let empty = EncounterStatusCode::builder().build_permissive();
        assert_eq!(empty.as_enum().unwrap(), None::<EncounterStatus>);
    });
    assert!(output.contains("TRACE"), "{output}");
    assert!(output.contains("building coded value without validation"), "{output}");

    let quiet = capture(Level::DEBUG, || {
        let _ = EncounterStatusCode::builder().build_permissive();
    });
    assert!(quiet.is_empty(), "{quiet}");
}
