//! Validation message accumulation for importers.

/// Three ordered message lists collected while parsing an external
/// format. Importers accumulate into this instead of failing
/// mid-parse; the import pipeline alone decides whether errors
/// escalate to a rejected import.
#[derive(Debug, Clone, Default)]
pub struct ValidationMessages {
    errors: Vec<String>,
    warnings: Vec<String>,
    infos: Vec<String>,
}

impl ValidationMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Non-empty errors is the terminal condition for a whole import.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
