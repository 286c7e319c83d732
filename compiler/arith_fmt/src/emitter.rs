//! Output Emitter
//!
//! Abstraction for output production during formatting.

use std::fmt::Write as _;

/// Trait for emitting formatted output.
///
/// The formatter writes to an emitter during rendering, in a single
/// left-to-right pass.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single space.
    fn emit_space(&mut self) {
        self.emit(" ");
    }

    /// Emit a number using the default `f64` display form.
    fn emit_number(&mut self, value: f64) {
        self.emit(&value.to_string());
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, text: &str) {
        (**self).emit(text);
    }

    fn emit_space(&mut self) {
        (**self).emit_space();
    }

    fn emit_number(&mut self, value: f64) {
        (**self).emit_number(value);
    }
}

/// String-based emitter for in-memory formatting.
///
/// Builds a single growable string incrementally.
#[derive(Default, Debug)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }

    fn emit_number(&mut self, value: f64) {
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_emitter_basic() {
        let mut emitter = StringEmitter::new();
        emitter.emit("6");
        emitter.emit_space();
        emitter.emit("+");
        assert_eq!(emitter.as_str(), "6 +");
        assert_eq!(emitter.len(), 3);
        assert_eq!(emitter.output(), "6 +");
    }

    #[test]
    fn test_string_emitter_numbers() {
        let mut emitter = StringEmitter::with_capacity(32);
        assert!(emitter.is_empty());
        for value in [6.0, 0.5, -0.0, f64::INFINITY, f64::NAN] {
            emitter.emit_number(value);
            emitter.emit_space();
        }
        assert_eq!(emitter.output(), "6 0.5 -0 inf NaN ");
    }

    #[test]
    fn test_default_number_rendering_matches_display() {
        struct Collect(Vec<String>);

        impl Emitter for Collect {
            fn emit(&mut self, text: &str) {
                self.0.push(text.to_owned());
            }
        }

        let mut collect = Collect(Vec::new());
        collect.emit_number(168.222_222_222_222_23);
        collect.emit_space();
        assert_eq!(collect.0, ["168.22222222222223", " "]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_negated<E: Emitter>(mut emitter: E, value: f64) {
            emitter.emit("-");
            emitter.emit_number(value);
        }

        let mut emitter = StringEmitter::new();
        write_negated(&mut emitter, 7.0);
        write_negated(&mut emitter, 0.25);
        assert_eq!(emitter.as_str(), "-7-0.25");
    }
}
