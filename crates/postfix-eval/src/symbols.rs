//! Symbol table for the Postfix++ evaluator.

/// Variable bindings `A`..`Z` → number, kept in first-assignment order.
///
/// Entries are only created or overwritten by assignment and are never
/// removed. Reassigning a name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    bindings: Vec<(char, f64)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, overwriting any earlier binding.
    pub fn assign(&mut self, name: char, value: f64) {
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.bindings.push((name, value)),
        }
    }

    pub fn get(&self, name: char) -> Option<f64> {
        self.bindings
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.bindings.iter().copied()
    }
}
