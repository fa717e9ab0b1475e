use crate::query::QueryParams;

/// Value of the layers query parameter.
///
/// Bare occurrences (`?__layers__` with no `=`) carry no id and are skipped,
/// so a parameter made only of those reads as `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayersValue {
    /// Parameter missing
    Absent,
    /// Exactly one occurrence
    Single(String),
    /// Repeated-key list, in URL order
    Multiple(Vec<String>),
}

impl LayersValue {
    /// Read the parameter `name` out of a parsed query.
    pub fn from_query(query: &QueryParams, name: &str) -> Self {
        let occurrences = query.get_all(name);

        if occurrences.len() > 1 {
            let ids: Vec<String> = occurrences.iter().flatten().cloned().collect();
            if ids.is_empty() {
                return LayersValue::Absent;
            }
            return LayersValue::Multiple(ids);
        }

        match occurrences.first() {
            Some(Some(id)) => LayersValue::Single(id.clone()),
            _ => LayersValue::Absent,
        }
    }

    /// Whether `layer_id` is one of the active ids.
    pub fn contains(&self, layer_id: &str) -> bool {
        match self {
            LayersValue::Absent => false,
            LayersValue::Single(id) => id == layer_id,
            LayersValue::Multiple(ids) => ids.iter().any(|id| id == layer_id),
        }
    }

    /// Write `layer_id` into `query` under `name`.
    ///
    /// A list gets the id appended even if it is already there. A single
    /// value is overwritten rather than promoted to a list, so a different
    /// id that was active before is dropped.
    pub fn apply_open(&self, query: &mut QueryParams, name: &str, layer_id: &str) {
        match self {
            LayersValue::Absent | LayersValue::Single(_) => query.set(name, layer_id),
            LayersValue::Multiple(_) => query.append(name, layer_id),
        }
    }
}
