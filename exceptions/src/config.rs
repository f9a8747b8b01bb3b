/// Naming scheme for the generated hierarchy
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub status_prefix: String,
    pub class_suffix: String,
    pub base_class: String,
    pub status_service: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            status_prefix: "S3Server".to_string(),
            class_suffix: "Exception".to_string(),
            base_class: "S3ServerException".to_string(),
            status_service: "S3".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn class_name(&self, name: &str) -> String {
        format!("{name}{}", self.class_suffix)
    }

    /// Name of the synthetic class grouping every error with `code`.
    pub fn status_class_name(&self, code: &str) -> String {
        format!("{}{code}{}", self.status_prefix, self.class_suffix)
    }

    /// Superclass for a named error: its status-code class, or the base
    /// class when the row carries no code.
    pub fn superclass_for(&self, status_code: &str) -> String {
        if status_code.is_empty() {
            self.base_class.clone()
        } else {
            self.status_class_name(status_code)
        }
    }

    pub fn status_doc_comment(&self, code: &str, phrase: &str) -> String {
        format!(
            "{} returned a status code {code}, which means {phrase}.",
            self.status_service
        )
    }
}
