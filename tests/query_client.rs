// tests/query_client.rs
mod common;

use cne_scrape::query::{Payload, QueryClient};
use cne_scrape::specs::markers::{NOT_EXISTS, NOT_REGISTERED, OBJECTION};
use cne_scrape::specs::{Classifier, RuleKind};
use cne_scrape::{Error, Status};

use common::{ScriptedTransport, URL, marker_page, objection_page, registered_page};

fn client(t: ScriptedTransport) -> QueryClient<ScriptedTransport> {
    QueryClient::with_transport(URL, t)
}

#[test]
fn registered_page_fills_every_field() {
    let mut c = client(ScriptedTransport::new().page(&registered_page()));
    let r = c.query("V", 12_000_000).unwrap();

    assert_eq!(r.cedula(), "V-12000000");
    assert_eq!(r.status(), Status::Registered);
    assert_eq!(r.full_name(), Some("Juan Jose Perez"));
    assert_eq!(r.state(), Some("Edo. Miranda"));
    assert_eq!(r.municipality(), Some("Mp. Sucre"));
    assert_eq!(r.parish(), Some("Pq. Petare"));
    assert_eq!(r.facility(), Some("U.E. Jose Marti"));
    assert_eq!(r.address(), Some("Calle Real De Petare Frente A La Plaza"));
    assert_eq!(c.last_result(), Some(&r));
}

#[test]
fn request_carries_nationality_and_number() {
    let mut c = client(ScriptedTransport::new().page(&marker_page(NOT_EXISTS)));
    c.query("e", 84_000_000).unwrap();

    assert_eq!(c.last_payload(), &Payload { nationality: "E".into(), cedula: "84000000".into() });
    assert_eq!(
        c.transport().last_query(),
        vec![("nacionalidad".to_string(), "E".to_string()), ("cedula".to_string(), "84000000".to_string())]
    );
}

#[test]
fn marker_pages_are_terminal() {
    let t = ScriptedTransport::new()
        .page(&marker_page(NOT_REGISTERED))
        .page(&marker_page(NOT_EXISTS))
        .page(&objection_page("FALLECIDO (1)"))
        .page(&objection_page("INHABILITADO POLITICAMENTE"));
    let mut c = client(t);

    let codes: Vec<u16> = (1..=4)
        .map(|n| c.query("V", n).unwrap())
        .map(|r| {
            assert!(r.full_name().is_none());
            r.status().code()
        })
        .collect();
    assert_eq!(codes, vec![900, 950, 120, 130]);
}

#[test]
fn not_registered_wins_over_objection() {
    let html = format!("<p>{NOT_REGISTERED}</p><p>{OBJECTION}</p><p>Objeción: FALLECIDO Descripción:</p>");
    let mut c = client(ScriptedTransport::new().page(&html));
    assert_eq!(c.query("V", 1).unwrap().status(), Status::NotRegistered);
}

#[test]
fn objection_without_reason_is_ambiguous() {
    let html = format!("<p>{OBJECTION}</p><p>sin detalle</p>");
    let mut c = client(ScriptedTransport::new().page(&html));
    let err = c.query("V", 7).unwrap_err();
    assert!(matches!(err, Error::ClassificationAmbiguity { ref identifier } if identifier == "V-7"));
    assert!(!err.is_connection());
}

#[test]
fn non_200_is_no_response() {
    let mut c = client(ScriptedTransport::new().status(503));
    let r = c.query("V", 5).unwrap();
    assert_eq!(r.status(), Status::NoResponse);
    assert_eq!(r.status_text(), "Sin Respuesta");
    assert_eq!(r.cedula(), "V-5");
}

#[test]
fn transport_failure_is_connection_error() {
    let mut c = client(ScriptedTransport::new().refused());
    let err = c.query("V", 9).unwrap_err();

    assert!(err.is_connection());
    let msg = err.to_string();
    assert!(msg.starts_with("[CNE] cannot reach the registry server"));
    assert!(msg.contains(URL));
    assert!(msg.contains("V-9"));
    assert_eq!(c.last_result().map(|r| r.status()), Some(Status::NoResponse));
}

#[test]
fn short_registered_page_is_unexpected_layout() {
    let mut c = client(ScriptedTransport::new().page("<p>Cédula: V-1 Nombre: ANA</p>"));
    assert!(matches!(c.query("V", 1), Err(Error::UnexpectedLayout { expected: 8, .. })));
}

#[test]
fn markers_are_per_client() {
    let mut custom = Classifier::new();
    custom.set_marker(RuleKind::NotExists, "CEDULA INVALIDA");

    let mut a = client(ScriptedTransport::new().page("<p>CEDULA INVALIDA</p>")).with_classifier(custom);
    let mut b = client(ScriptedTransport::new().page(&marker_page(NOT_EXISTS)));

    assert_eq!(a.query("V", 1).unwrap().status(), Status::NotExists);
    assert_eq!(b.query("V", 1).unwrap().status(), Status::NotExists);
    assert_eq!(b.classifier().marker(RuleKind::NotExists), Some(NOT_EXISTS));
}

#[test]
fn result_as_json_uses_codes() {
    let mut c = client(ScriptedTransport::new().page(&marker_page(NOT_REGISTERED)));
    assert!(c.as_json().is_none());
    c.query("V", 3).unwrap();
    let v = c.as_json().unwrap();
    assert_eq!(v["cedula"], "V-3");
    assert_eq!(v["status"], 900);
}
