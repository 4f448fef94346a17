// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use cne_scrape::core::{HttpResponse, Transport};
use cne_scrape::error::TransportError;

pub const URL: &str = "http://registry.test/ce.php";

/// Answers GETs from a queue and counts them. An empty queue is a dead server.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    calls: Cell<usize>,
    last_query: RefCell<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, html: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse::ok(html)));
        self
    }

    pub fn status(self, status: u16) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: String::new() }));
        self
    }

    pub fn refused(self) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Other(String::from("connection refused"))));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.last_query.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, _url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() =
            query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other(String::from("no scripted reply"))))
    }
}

pub fn registered_page() -> String {
    String::from(
        "<html><head><title>CNE</title></head><body>\n\
         <p>CONSULTA DE DATOS</p>\n\
         <p>Cédula: V-12.000.000</p>\n\
         <p>Nombre: JUAN JOSE PEREZ</p>\n\
         <p>Estado: EDO. MIRANDA</p>\n\
         <p>Municipio: MP. SUCRE</p>\n\
         <p>Parroquia: PQ. PETARE</p>\n\
         <p>Centro: U.E. JOSE MARTI</p>\n\
         <p>Dirección: CALLE REAL DE PETARE FRENTE A LA PLAZA</p>\n\
         <p>Impresión de Consulta de Datos</p>\n\
         </body></html>",
    )
}

pub fn marker_page(sentence: &str) -> String {
    format!("<html><body>\n<p>Registro Electoral</p>\n<p>{sentence}</p>\n</body></html>")
}

pub fn objection_page(reason: &str) -> String {
    format!(
        "<html><body>\n<p>ADVERTENCIA</p>\n<p>{}</p>\n<p>Objeción: {}</p>\n<p>Descripción: acudir a la oficina regional</p>\n</body></html>",
        cne_scrape::specs::markers::OBJECTION,
        reason
    )
}
