use serde_derive::Serialize;
use std::{
    fmt,
    fs::File,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes a `DecomposeRecord` into a given log for every
/// decomposition span it observes.
pub struct JsonLogger<W: Write = File> {
    log: Mutex<W>,
    next_id: AtomicU64,
    decompose_record: Mutex<DecomposeRecord>,
}

impl<W: Write> JsonLogger<W> {
    pub fn new(log: W) -> Self {
        Self {
            log: Mutex::new(log),
            next_id: AtomicU64::new(1),
            decompose_record: Mutex::new(DecomposeRecord::default()),
        }
    }
}

impl<W: Write + Send + 'static> subscriber::Subscriber for JsonLogger<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, span: &span::Attributes) -> Id {
        let mut recorder = Recorder::default();
        span.record(&mut recorder);
        if let Ok(mut record) = self.decompose_record.lock() {
            *record = DecomposeRecord {
                strategy: recorder.strategy,
                ..DecomposeRecord::default()
            };
        }
        Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        let mut record = match self.decompose_record.lock() {
            Ok(record) => record,
            Err(_) => return,
        };
        match recorder.event.as_deref() {
            Some(super::CONVERT) => record.expression = recorder.expression,
            Some(super::NNF) => record.nnf = recorder.expression,
            Some(super::DISTRIBUTE) => record.distributed = recorder.expression,
            Some(super::SPLIT) => record.count = recorder.count,
            Some(super::FRAGMENT) => {
                if let Some(fragment) = FragmentRecord::try_from(recorder) {
                    record.fragments.push(fragment);
                }
            }
            _ => (),
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {
        let record = match self.decompose_record.lock() {
            Ok(record) => record,
            Err(_) => return,
        };
        if let (Ok(json), Ok(mut log)) = (serde_json::to_string_pretty(&*record), self.log.lock())
        {
            let _ = writeln!(log, "{}", json);
        }
    }
}

/// Log information associated to the decomposition of a condition, including the expression
/// after every stage and the rendered fragments.
#[derive(Serialize, Default)]
struct DecomposeRecord {
    strategy: Option<String>,
    expression: Option<String>,
    nnf: Option<String>,
    distributed: Option<String>,
    count: Option<u64>,
    fragments: Vec<FragmentRecord>,
}

/// A fragment, rendered as a condition, and its position among the fragments of a condition.
#[derive(Serialize)]
struct FragmentRecord {
    index: u64,
    fragment: String,
}

impl FragmentRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(FragmentRecord {
            index: value.index?,
            fragment: value.fragment?,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be folded into the current `DecomposeRecord`.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    strategy: Option<String>,
    expression: Option<String>,
    fragment: Option<String>,
    index: Option<u64>,
    count: Option<u64>,
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::INDEX_FIELD => self.index = Some(value),
            super::COUNT_FIELD => self.count = Some(value),
            _ => (),
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::STRATEGY_FIELD => self.strategy = Some(format!("{:?}", value)),
            super::EXPRESSION_FIELD => self.expression = Some(format!("{:?}", value)),
            super::FRAGMENT_FIELD => self.fragment = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
