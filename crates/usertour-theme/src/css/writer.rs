//! Ordered accumulator of `--usertour-*` declarations.

use tracing::debug;

use crate::schema::ColorSlot;

pub(crate) const TOKEN_PREFIX: &str = "--usertour-";

/// Fallback written for a slot that reached the serializer unresolved.
const UNRESOLVED: &str = "initial";

#[derive(Debug, Default)]
pub(crate) struct TokenWriter {
    decls: Vec<String>,
}

impl TokenWriter {
    pub(crate) fn raw(&mut self, name: &str, value: impl std::fmt::Display) {
        self.decls.push(format!("{TOKEN_PREFIX}{name}: {value};"));
    }

    pub(crate) fn px(&mut self, name: &str, value: u32) {
        self.raw(name, format_args!("{value}px"));
    }

    /// Percentage setting (0-100) written as a CSS fraction.
    pub(crate) fn fraction(&mut self, name: &str, percent: u32) {
        let v = percent.min(100) as f64 / 100.0;
        self.raw(name, v);
    }

    pub(crate) fn color(&mut self, name: &str, value: &str) {
        self.raw(name, value.trim());
    }

    pub(crate) fn slot(&mut self, name: &str, slot: &ColorSlot) {
        match slot.as_concrete() {
            Some(value) => self.color(name, value),
            None => {
                debug!("color token {name} is unresolved");
                self.raw(name, UNRESOLVED);
            }
        }
    }

    pub(crate) fn finish(self) -> String {
        self.decls.join("\n")
    }
}
