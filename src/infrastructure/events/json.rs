//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON representation of one event
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            project_root,
            force,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "project_root": project_root.display().to_string(),
            "force": force,
            "dry_run": dry_run,
        }),

        DeployEvent::ChannelReset { channel } => serde_json::json!({
            "event": "channel_reset",
            "command": "deploy",
            "channel": channel.as_str(),
        }),

        DeployEvent::ModuleUploaded {
            target,
            channel,
            uri,
            path,
        } => serde_json::json!({
            "event": "module_uploaded",
            "command": "deploy",
            "target": target.as_str(),
            "channel": channel.as_str(),
            "uri": uri,
            "path": path.display().to_string(),
        }),

        DeployEvent::ModuleSkipped { channel, path } => serde_json::json!({
            "event": "module_skipped",
            "command": "deploy",
            "channel": channel.as_str(),
            "path": path.display().to_string(),
            "reason": "up_to_date",
        }),

        DeployEvent::RestDirectory { path, role, target } => serde_json::json!({
            "event": "rest_directory",
            "command": "deploy",
            "path": path.display().to_string(),
            "role": role.as_str(),
            "target": target.map(|t| t.as_str()),
        }),

        DeployEvent::EntityDocumentWritten { uri, path } => serde_json::json!({
            "event": "entity_document_written",
            "command": "deploy",
            "uri": uri,
            "path": path.display().to_string(),
        }),

        DeployEvent::WalkSkipped { entities_root } => serde_json::json!({
            "event": "walk_skipped",
            "command": "deploy",
            "entities_root": entities_root.display().to_string(),
        }),

        DeployEvent::CacheInvalidated { target } => serde_json::json!({
            "event": "cache_invalidated",
            "command": "deploy",
            "target": target.as_str(),
        }),

        DeployEvent::CacheInvalidationFailed { target, error } => serde_json::json!({
            "event": "cache_invalidation_failed",
            "command": "deploy",
            "target": target.as_str(),
            "error": error,
        }),

        DeployEvent::Failed { kind, error } => serde_json::json!({
            "event": "error",
            "command": "deploy",
            "kind": kind,
            "error": error,
        }),

        DeployEvent::Completed {
            uploaded_count,
            skipped_count,
            entity_document_count,
            cache_invalidated,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "uploaded": uploaded_count,
            "skipped": skipped_count,
            "entity_documents": entity_document_count,
            "cache_invalidated": cache_invalidated,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DirectoryRole, Target};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink() -> (JsonEventSink, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = JsonEventSink::with_writer(TestWriter {
            buffer: buffer.clone(),
        });
        (sink, buffer)
    }

    #[test]
    fn json_sink_writes_one_line_per_event() {
        let (sink, buffer) = sink();

        sink.on_event(DeployEvent::Started {
            project_root: PathBuf::from("/proj"),
            force: true,
            dry_run: false,
        });
        sink.on_event(DeployEvent::CacheInvalidated {
            target: Target::Staging,
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"event\":\"start\""));
        assert!(lines[0].contains("\"force\":true"));
        assert!(lines[1].contains("\"target\":\"staging\""));
    }

    #[test]
    fn unrouted_rest_directory_has_null_target() {
        let value = event_to_json(&DeployEvent::RestDirectory {
            path: PathBuf::from("/proj/plugins/entities/C/REST"),
            role: DirectoryRole::UnroutedRest,
            target: None,
        });
        assert_eq!(value["role"], "unrouted-rest");
        assert!(value["target"].is_null());
    }

    #[test]
    fn complete_event_reports_counts() {
        let value = event_to_json(&DeployEvent::Completed {
            uploaded_count: 3,
            skipped_count: 4,
            entity_document_count: 1,
            cache_invalidated: true,
        });
        assert_eq!(value["uploaded"], 3);
        assert_eq!(value["skipped"], 4);
        assert_eq!(value["status"], "success");
    }
}
