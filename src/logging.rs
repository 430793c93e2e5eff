//! `tracing` sink that writes to the browser console.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

struct ConsoleLayer;

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

fn format_line(level: &Level, target: &str, visitor: &LineVisitor) -> String {
    format!("{} {}: {}{}", level, target, visitor.message, visitor.fields)
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        let line = format_line(meta.level(), meta.target(), &visitor);

        let value = wasm_bindgen::JsValue::from_str(&line);
        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}

/// Install the console subscriber. Later calls are ignored.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer.with_filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_level_target_message_and_fields() {
        let visitor = LineVisitor {
            message: "builder row added".into(),
            fields: " row=2 total=2".into(),
        };
        assert_eq!(
            format_line(&Level::DEBUG, "titan::builder", &visitor),
            "DEBUG titan::builder: builder row added row=2 total=2"
        );
    }
}
