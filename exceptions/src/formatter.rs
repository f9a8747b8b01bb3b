use crate::types::ClassDefinition;

pub trait ClassFormatter: Send + Sync {
    fn format(&self, class: &ClassDefinition) -> String;
}

/// Nested `public static class` blocks meant to be pasted inside the base
/// exception class. Every class gets the `(message)` and
/// `(message, requestId, hostId)` constructors.
#[derive(Debug, Clone)]
pub struct JavaClassFormatter {
    pub template: String,
}

const JAVA_CLASS_TEMPLATE: &str = "/** {doc}  */
public static class {class} extends {super} {
    public {class} (String message) {
        this(message, null, null);
    }
    public {class} (String message, String requestId, String hostId) {
        super(message, requestId, hostId);
    }
}
";

impl Default for JavaClassFormatter {
    fn default() -> Self {
        Self {
            template: JAVA_CLASS_TEMPLATE.to_string(),
        }
    }
}

impl ClassFormatter for JavaClassFormatter {
    fn format(&self, class: &ClassDefinition) -> String {
        // doc goes last so text inside the comment is never re-substituted
        self.template
            .replace("{class}", &class.class_name)
            .replace("{super}", &class.superclass_name)
            .replace("{doc}", &class.doc_comment)
    }
}
