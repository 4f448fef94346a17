// src/query.rs
//! Query client: one GET per cédula, classified and parsed into a [`Record`].

use tracing::{debug, error, info, warn};

use crate::config::consts::{PARAM_CEDULA, PARAM_NATIONALITY};
use crate::config::options::QueryOptions;
use crate::core::html::page_text;
use crate::core::net::{HttpTransport, Transport};
use crate::dni::Nationality;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::specs::{Classifier, PageLayout, PositionalLayout, Verdict};

/// Parameters of the most recent request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload {
    pub nationality: String,
    pub cedula: String,
}

pub struct QueryClient<T: Transport = HttpTransport> {
    url: String,
    transport: T,
    classifier: Classifier,
    layout: Box<dyn PageLayout>,
    payload: Payload,
    result: Option<Record>,
}

impl QueryClient<HttpTransport> {
    pub fn new(opts: &QueryOptions) -> Result<Self> {
        let transport = HttpTransport::new(opts.timeout).map_err(Error::Client)?;
        Ok(Self::with_transport(opts.base_url.clone(), transport))
    }
}

impl<T: Transport> QueryClient<T> {
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
            classifier: Classifier::default(),
            layout: Box::new(PositionalLayout),
            payload: Payload::default(),
            result: None,
        }
    }

    /// Swap the registered-page parser (e.g. after a site redesign).
    pub fn with_layout(mut self, layout: impl PageLayout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn url(&self) -> &str { &self.url }
    pub fn transport(&self) -> &T { &self.transport }
    pub fn classifier(&self) -> &Classifier { &self.classifier }
    pub fn classifier_mut(&mut self) -> &mut Classifier { &mut self.classifier }
    pub fn last_payload(&self) -> &Payload { &self.payload }

    /// Result of the latest call; the no-response stub if that call failed.
    pub fn last_result(&self) -> Option<&Record> {
        self.result.as_ref()
    }

    pub fn as_json(&self) -> Option<serde_json::Value> {
        self.result.as_ref().and_then(|r| serde_json::to_value(r).ok())
    }

    /// Look up one cédula.
    ///
    /// Non-200 answers leave the record at `NoResponse` without error; only a
    /// transport failure (`Error::Connection`) or an unreadable page is an `Err`.
    pub fn query(&mut self, nationality: &str, id_number: u64) -> Result<Record> {
        let nat = Nationality::parse(nationality);
        let cedula = id_number.to_string();
        let identifier = format!("{nat}-{cedula}");

        self.payload = Payload { nationality: s!(nat.as_str()), cedula: cedula.clone() };
        self.result = Some(Record::new(&identifier));

        debug!("Query: GET {} [{}]", self.url, identifier);
        let params = [(PARAM_NATIONALITY, nat.as_str()), (PARAM_CEDULA, cedula.as_str())];
        let resp = self.transport.get(&self.url, &params).map_err(|source| {
            error!("Query: {} unreachable for {}: {}", self.url, identifier, source);
            Error::Connection { url: self.url.clone(), identifier: identifier.clone(), source }
        })?;

        if resp.status != 200 {
            warn!("Query: {} answered HTTP {} for {}", self.url, resp.status, identifier);
            return Ok(Record::new(&identifier));
        }

        let text = page_text(&resp.body);
        let record = match self.classifier.classify(&identifier, &text)? {
            Verdict::Terminal(status) => Record::with_status(&identifier, status),
            Verdict::Registered => self.layout.parse(&identifier, &text)?,
        };
        info!("Query: {} → {} ({})", identifier, record.status().code(), record.status_text());

        self.result = Some(record.clone());
        Ok(record)
    }
}
