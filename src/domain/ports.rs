use std::collections::HashMap;

/// Keyed interpretation texts, e.g. `"Numerology23"` -> paragraph.
///
/// Consulted by the core, never computed by it.
pub trait InterpretationSource {
    fn text_for(&self, key: &str) -> Option<&str>;

    fn is_empty(&self) -> bool;
}

impl InterpretationSource for HashMap<String, String> {
    fn text_for(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

/// Used when no interpretation table is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterpretations;

impl InterpretationSource for NoInterpretations {
    fn text_for(&self, _key: &str) -> Option<&str> {
        None
    }

    fn is_empty(&self) -> bool {
        true
    }
}
