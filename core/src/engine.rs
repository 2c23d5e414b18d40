use crate::context::Context;

/// Configuration for the contexts it creates.
#[derive(Debug, Clone)]
pub struct Engine {
    strict: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict contexts raise on rejected writes and deletes; sloppy ones
    /// report `false` and leave the object untouched.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn new_context(&self) -> Context {
        Context::new_with_strict(self.strict)
    }
}
