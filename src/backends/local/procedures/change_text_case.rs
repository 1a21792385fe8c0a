// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::{string_arg, STRING_ARG};
use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

/// Words left lowercase by title case unless they lead the text.
const SMALL_WORDS: [&str; 14] = [
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Upper,
    Lower,
    /// First letter of each word capitalized.
    Proper,
    /// Proper case, except small connecting words after the first.
    Title,
}

/// Change Text Case procedure - converts `string` to a different case
pub struct ChangeTextCaseProcedure {
    case: TextCase,
    name: &'static str,
}

impl ChangeTextCaseProcedure {
    pub fn new(case: TextCase) -> Self {
        let name = match case {
            TextCase::Upper => "change_text_case_upper",
            TextCase::Lower => "change_text_case_lower",
            TextCase::Proper => "change_text_case_proper",
            TextCase::Title => "change_text_case_title",
        };
        Self { case, name }
    }

    pub fn upper() -> Self {
        Self::new(TextCase::Upper)
    }

    pub fn lower() -> Self {
        Self::new(TextCase::Lower)
    }

    pub fn proper() -> Self {
        Self::new(TextCase::Proper)
    }

    pub fn title() -> Self {
        Self::new(TextCase::Title)
    }

    pub fn convert(&self, input: &str) -> String {
        match self.case {
            TextCase::Upper => input.to_uppercase(),
            TextCase::Lower => input.to_lowercase(),
            TextCase::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextCase::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    if i == 0 || !SMALL_WORDS.contains(&lower_word.as_str()) {
                        capitalize(word)
                    } else {
                        lower_word
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Uppercase the first character, lowercase the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

impl Procedure for ChangeTextCaseProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let input = string_arg(self.name, &args, STRING_ARG)?;
        Ok(Yielded::Value(Value::String(self.convert(input))))
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let cases = vec![
            (ChangeTextCaseProcedure::upper(), "Hello World", "HELLO WORLD"),
            (ChangeTextCaseProcedure::upper(), "123!@#", "123!@#"),
            (ChangeTextCaseProcedure::lower(), "HeLLo", "hello"),
            (ChangeTextCaseProcedure::proper(), "hello   wORLD", "Hello World"),
            (
                ChangeTextCaseProcedure::title(),
                "the lord of the rings",
                "The Lord of the Rings",
            ),
            (ChangeTextCaseProcedure::title(), "", ""),
        ];

        for (procedure, input, expected) in cases {
            assert_eq!(procedure.convert(input), expected, "{}", procedure.name());
        }
    }
}
