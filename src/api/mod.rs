// Export submodules
pub mod campaign;
pub mod health;
pub mod list;
pub mod subscriber;
pub mod transactional;

use std::fmt::Display;

/// Query string for list endpoints.
///
/// Only filters that were actually set end up in the request; unset ones are
/// not sent at all, not even as empty values.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub(crate) fn push<V: Display>(&mut self, name: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
