//! Tracing layer that appends events to a JSONL file.

use std::fmt::Write as FmtWrite;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::entry::JsonLogEntry;

/// Appends every event as one JSON line to `<logs_dir>/<instance>.jsonl`
pub struct JsonlLayer {
    instance: String,
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonlLayer {
    /// Open (append) the log file, creating `logs_dir` if needed
    pub fn new(logs_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        let instance = instance.into();
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let path = logs_dir.join(format!("{}.jsonl", instance));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            instance,
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl<S: Subscriber> Layer<S> for JsonlLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = JsonLogEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.instance.as_str(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        // A failing log write must not take the UI down
        let _ = self.write(&entry);
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}
