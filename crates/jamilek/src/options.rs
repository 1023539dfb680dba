/// Default bound on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum container nesting depth (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl Options {
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }
}
