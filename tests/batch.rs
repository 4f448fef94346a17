// tests/batch.rs
mod common;

use cne_scrape::progress::Progress;
use cne_scrape::query::QueryClient;
use cne_scrape::specs::markers::NOT_EXISTS;
use cne_scrape::{Batch, Error, Status};

use common::{ScriptedTransport, URL, marker_page, objection_page, registered_page};

fn batch(t: ScriptedTransport) -> Batch<ScriptedTransport> {
    Batch::new(QueryClient::with_transport(URL, t))
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    logs: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn item_done(&mut self, token: &str) { self.done.push(token.to_string()); }
    fn item_failed(&mut self, token: &str) { self.failed.push(token.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn malformed_tokens_are_skipped() {
    let mut b = batch(ScriptedTransport::new().page(&registered_page()));
    let mut rec = Recorder::default();
    b.process(&["V-12000000", "X"], Some(&mut rec)).unwrap();

    assert_eq!(b.all().len(), 1);
    assert_eq!(b.get(0).map(|r| r.status()), Some(Status::Registered));
    assert_eq!(b.errors(), ["X".to_string()]);
    assert_eq!(b.client().transport().calls(), 1);

    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, vec!["V-12000000"]);
    assert_eq!(rec.failed, vec!["X"]);
    assert!(rec.finished);
}

#[test]
fn unreadable_pages_are_skipped() {
    let t = ScriptedTransport::new()
        .page(&objection_page(""))
        .page("<html><body><p>Cédula: V-3</p></body></html>")
        .page(&registered_page());
    let mut b = batch(t);
    let mut rec = Recorder::default();

    b.process(&["V-1", "V-3", "V-12000000"], Some(&mut rec)).unwrap();

    assert_eq!(b.client().transport().calls(), 3);
    assert_eq!(b.errors(), ["V-1".to_string(), "V-3".to_string()]);
    assert_eq!(b.all().len(), 1);
    assert_eq!(b.all()[0].cedula(), "V-12000000");
    assert_eq!(b.all()[0].status(), Status::Registered);
    assert_eq!(rec.failed, vec!["V-1", "V-3"]);
    assert!(rec.finished);
}

#[test]
fn connection_failure_keeps_partial_results() {
    let t = ScriptedTransport::new().page(&registered_page()).refused();
    let mut b = batch(t);
    let mut rec = Recorder::default();

    let err = b
        .process(&["V-12000000", "E-84000000", "V-1"], Some(&mut rec))
        .unwrap_err();

    assert!(err.is_connection());
    assert_eq!(b.client().transport().calls(), 2);
    assert_eq!(b.all().len(), 1);
    assert_eq!(b.all()[0].cedula(), "V-12000000");

    let stub = b.client().last_result().unwrap();
    assert_eq!(stub.cedula(), "E-84000000");
    assert_eq!(stub.status(), Status::NoResponse);

    assert_eq!(rec.logs.len(), 1);
    assert!(rec.finished);
}

#[test]
fn empty_batch_sends_nothing() {
    let mut b = batch(ScriptedTransport::new());
    let none: [&str; 0] = [];
    assert!(matches!(b.process(&none, None), Err(Error::EmptyBatch)));
    assert_eq!(b.client().transport().calls(), 0);
}

#[test]
fn runs_append_and_keep_order() {
    let t = ScriptedTransport::new()
        .page(&marker_page(NOT_EXISTS))
        .status(500)
        .page(&registered_page());
    let mut b = batch(t);

    b.process(&["E-1".to_string(), "V-2".to_string()], None).unwrap();
    b.process(&["v-3"], None).unwrap();

    let codes: Vec<(String, u16)> = b
        .all()
        .iter()
        .map(|r| (r.cedula().to_string(), r.status().code()))
        .collect();
    assert_eq!(
        codes,
        vec![("E-1".into(), 950), ("V-2".into(), 500), ("V-3".into(), 100)]
    );

    let (results, errors) = b.into_parts();
    assert_eq!(results.len(), 3);
    assert!(errors.is_empty());
}
