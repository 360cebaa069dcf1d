//! Drawing-command plumbing: brush construction and user feedback.
//!
//! Bad arguments never abort the host process; construction failures are
//! reported as one human-readable message on a sink and no brush is
//! produced.

use log::warn;

use crate::block::BlockResolver;
use crate::brush::{Brush, BrushArgs, BrushRegistry};

/// Sink for human-readable feedback to the invoking user or session.
pub trait Messenger {
    /// Deliver one message line.
    fn send(&self, text: &str);
}

/// Messenger that routes feedback to the log.
#[derive(Debug, Default)]
pub struct LogMessenger;

impl Messenger for LogMessenger {
    fn send(&self, text: &str) {
        warn!("{text}");
    }
}

/// Build a brush for a drawing command.
///
/// Returns `None` after sending the failure reason through `messenger` if
/// the name or the arguments are bad.
pub fn build_brush(
    registry: &BrushRegistry,
    name: &str,
    args: &BrushArgs<'_>,
    resolver: &dyn BlockResolver,
    messenger: &dyn Messenger,
) -> Option<Box<dyn Brush>> {
    match registry.make(name, args, resolver) {
        Ok(brush) => Some(brush),
        Err(err) => {
            messenger.send(&err.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::block::{BlockEntry, BlockTable};

    #[derive(Default)]
    struct RecordingMessenger {
        lines: RefCell<Vec<String>>,
    }

    impl Messenger for RecordingMessenger {
        fn send(&self, text: &str) {
            self.lines.borrow_mut().push(text.to_string());
        }
    }

    fn args(message: &str) -> BrushArgs<'_> {
        BrushArgs {
            message,
            held: BlockEntry::simple(1),
            seed: 0,
        }
    }

    #[test]
    fn test_success_sends_nothing() {
        let registry = BrushRegistry::with_builtin();
        let table = BlockTable::with_defaults();
        let messenger = RecordingMessenger::default();

        let brush = build_brush(&registry, "random", &args("stone/3 glass"), &table, &messenger);
        assert!(brush.is_some());
        assert!(messenger.lines.borrow().is_empty());
    }

    #[test]
    fn test_bad_frequency_reports_and_yields_no_brush() {
        let registry = BrushRegistry::with_builtin();
        let table = BlockTable::with_defaults();
        let messenger = RecordingMessenger::default();

        let brush = build_brush(&registry, "random", &args("stone/0"), &table, &messenger);
        assert!(brush.is_none());

        let lines = messenger.lines.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("frequency"), "{}", lines[0]);
    }

    #[test]
    fn test_unknown_block_reports_name() {
        let registry = BrushRegistry::with_builtin();
        let table = BlockTable::with_defaults();
        let messenger = RecordingMessenger::default();

        let brush = build_brush(&registry, "random", &args("mystery"), &table, &messenger);
        assert!(brush.is_none());
        assert!(messenger.lines.borrow()[0].contains("mystery"));
    }

    #[test]
    fn test_unknown_brush_reports_name() {
        let registry = BrushRegistry::with_builtin();
        let table = BlockTable::with_defaults();
        let messenger = RecordingMessenger::default();

        let brush = build_brush(&registry, "paint", &args(""), &table, &messenger);
        assert!(brush.is_none());
        assert!(messenger.lines.borrow()[0].contains("paint"));
    }
}
