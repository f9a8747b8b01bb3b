use std::collections::HashSet;
use std::io::{Read, Write};

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::extractor::RowExtractor;
use crate::formatter::{ClassFormatter, JavaClassFormatter};
use crate::status::{lookup_phrase, sorted_status_codes, ReasonPhrases, StandardReasonPhrases};
use crate::types::{ClassDefinition, ErrorKind, ErrorRow, GenerationSummary, Result};

#[derive(Debug, Default)]
struct EmissionState {
    seen_names: HashSet<String>,
    seen_status_codes: HashSet<String>,
    summary: GenerationSummary,
}

/// Turns an error table into exception class definitions.
///
/// Named classes are written in row order as rows are read; the status-code
/// classes they extend are written afterwards in ascending code order.
pub struct Generator {
    config: GeneratorConfig,
    phrases: Box<dyn ReasonPhrases>,
    formatter: Box<dyn ClassFormatter>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            phrases: Box::new(StandardReasonPhrases),
            formatter: Box::new(JavaClassFormatter::default()),
        }
    }

    #[must_use]
    pub fn with_phrases(mut self, phrases: impl ReasonPhrases + 'static) -> Self {
        self.phrases = Box::new(phrases);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ClassFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Reads `input` to the end before generating anything.
    ///
    /// # Errors
    /// `UnreadableInput` if the stream fails, otherwise as [`Generator::generate`].
    pub fn generate_from_reader<R: Read, W: Write>(
        &self,
        mut input: R,
        out: &mut W,
    ) -> Result<GenerationSummary> {
        let mut raw = Vec::new();
        input
            .read_to_end(&mut raw)
            .map_err(GeneratorError::UnreadableInput)?;
        let text = String::from_utf8_lossy(&raw);
        self.generate(&text, out)
    }

    /// Generates every class for `input`, writing each block as soon as it
    /// is built. Blocks written before a failure stay written.
    ///
    /// # Errors
    /// `MalformedStatusCode` when a collected code has no reason phrase,
    /// `Write` when `out` rejects a block.
    pub fn generate<W: Write>(&self, input: &str, out: &mut W) -> Result<GenerationSummary> {
        let mut state = EmissionState::default();
        let mut rows = RowExtractor::new(input);

        for row in rows.by_ref() {
            self.process_row(&row, &mut state, out)?;
        }
        state.summary.rows_skipped = rows.skipped();

        self.emit_status_classes(&mut state, out)
            .map_err(|e| e.with_context("Emitting status-code classes"))?;

        out.flush().map_err(GeneratorError::Write)?;
        Ok(state.summary)
    }

    fn process_row<W: Write>(
        &self,
        row: &ErrorRow,
        state: &mut EmissionState,
        out: &mut W,
    ) -> Result<()> {
        state.summary.rows_matched += 1;
        match row.kind {
            ErrorKind::Client => state.summary.client_rows += 1,
            ErrorKind::Server => state.summary.server_rows += 1,
        }

        // A repeated name is inert: no class and no status code, even when
        // its code differs from the first occurrence.
        if state.seen_names.contains(&row.name) {
            state.summary.duplicate_rows += 1;
        } else {
            if row.has_status_code() {
                state.seen_status_codes.insert(row.status_code.clone());
            }
            let class = ClassDefinition {
                class_name: self.config.class_name(&row.name),
                superclass_name: self.config.superclass_for(&row.status_code),
                doc_comment: row.reason.clone(),
            };
            self.write_class(&class, out)?;
            state.summary.exception_classes += 1;
        }
        state.seen_names.insert(row.name.clone());

        Ok(())
    }

    fn emit_status_classes<W: Write>(&self, state: &mut EmissionState, out: &mut W) -> Result<()> {
        for code in sorted_status_codes(&state.seen_status_codes) {
            let phrase = lookup_phrase(&*self.phrases, &code)?;
            let class = ClassDefinition {
                class_name: self.config.status_class_name(&code),
                superclass_name: self.config.base_class.clone(),
                doc_comment: self.config.status_doc_comment(&code, &phrase),
            };
            self.write_class(&class, out)?;
            state.summary.status_classes += 1;
        }
        Ok(())
    }

    fn write_class<W: Write>(&self, class: &ClassDefinition, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.formatter.format(class)).map_err(GeneratorError::Write)
    }
}
