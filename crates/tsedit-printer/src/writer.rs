//! Indentation-aware text writer used by the structure printers.
//!
//! Every line written starts with the base indentation followed by one
//! indentation unit per block level. Empty lines are never indented.

use tsedit_common::ManipulationSettings;

pub struct CodeWriter {
    output: String,
    new_line: &'static str,
    indent_text: &'static str,
    quote: char,
    base_indentation: String,
    indent_level: u32,
}

impl CodeWriter {
    pub fn new(settings: &ManipulationSettings) -> Self {
        CodeWriter {
            output: String::new(),
            new_line: settings.new_line_kind.as_str(),
            indent_text: settings.indentation_text.as_str(),
            quote: settings.quote_kind.as_char(),
            base_indentation: String::new(),
            indent_level: 0,
        }
    }

    /// Prefix every line with `indentation` before the block indentation.
    pub fn with_base_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.base_indentation = indentation.into();
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn into_string(self) -> String {
        self.output
    }

    #[inline]
    fn is_at_start_of_line(&self) -> bool {
        self.output.is_empty() || self.output.ends_with('\n')
    }

    pub fn is_last_new_line(&self) -> bool {
        self.output.ends_with('\n')
    }

    pub fn is_last_blank_line(&self) -> bool {
        let trimmed = self.output.strip_suffix(self.new_line);
        trimmed.is_some_and(|rest| rest.ends_with('\n'))
    }

    fn write_indentation(&mut self) {
        self.output.push_str(&self.base_indentation);
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_text);
        }
    }

    /// Write text, indenting each non-empty line and normalizing line breaks.
    pub fn write(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.output.push_str(self.new_line);
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            if self.is_at_start_of_line() {
                self.write_indentation();
            }
            self.output.push_str(line);
        }
        self
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.output.push_str(self.new_line);
        self
    }

    pub fn new_line_if_last_not(&mut self) -> &mut Self {
        if !self.output.is_empty() && !self.is_last_new_line() {
            self.new_line();
        }
        self
    }

    /// End the current line and leave one empty line.
    pub fn blank_line(&mut self) -> &mut Self {
        self.new_line_if_last_not().new_line()
    }

    pub fn blank_line_if_last_not(&mut self) -> &mut Self {
        if !self.is_last_blank_line() {
            self.blank_line();
        }
        self
    }

    pub fn space(&mut self) -> &mut Self {
        self.output.push(' ');
        self
    }

    pub fn space_if_last_not(&mut self) -> &mut Self {
        if !self.is_at_start_of_line() && !self.output.ends_with(' ') {
            self.space();
        }
        self
    }

    /// Write `text` between the configured quote characters.
    pub fn quote(&mut self, text: &str) -> &mut Self {
        let quote = self.quote;
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push(quote);
        for ch in text.chars() {
            match ch {
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                c if c == quote => {
                    quoted.push('\\');
                    quoted.push(c);
                }
                c => quoted.push(c),
            }
        }
        quoted.push(quote);
        self.write(&quoted)
    }

    /// ` {`, the indented contents, then `}` on its own line.
    pub fn inline_block(&mut self, contents: impl FnOnce(&mut CodeWriter)) -> &mut Self {
        self.space_if_last_not();
        self.write("{").new_line();
        self.indent_level += 1;
        contents(self);
        self.new_line_if_last_not();
        self.indent_level -= 1;
        self.write("}")
    }

    /// Like `inline_block`, followed by a line break.
    pub fn block(&mut self, contents: impl FnOnce(&mut CodeWriter)) -> &mut Self {
        self.inline_block(contents).new_line()
    }
}
