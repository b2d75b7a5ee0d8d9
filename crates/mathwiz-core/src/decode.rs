//! Decoding of the JSON text columns stored alongside problems and questions.

use serde_json::Value;

use crate::error::{Entity, EvalError, Result};
use crate::model::{ExpectedAnswer, PracticeProblem, QuestionType, QuizQuestion};

/// Decode a practice problem's stored answer payload.
///
/// The shape of the payload decides the variant: a number is `Numeric`, a
/// string is `Text`, a list is `OneOf`. Numbers inside a list are kept as
/// their textual form so `[4, "four"]` accepts `"4"`.
pub fn expected_answer(problem: &PracticeProblem) -> Result<ExpectedAnswer> {
    let malformed = |reason: String| EvalError::MalformedData {
        entity: Entity::Problem,
        id: problem.id,
        field: "answer",
        reason,
    };

    let value: Value = serde_json::from_str(&problem.answer).map_err(|e| malformed(e.to_string()))?;

    match value {
        Value::Number(n) => n
            .as_f64()
            .map(ExpectedAnswer::Numeric)
            .ok_or_else(|| malformed(format!("number out of range: {n}"))),
        Value::String(s) => Ok(ExpectedAnswer::Text(s)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(malformed(format!(
                    "unsupported list item: {}",
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(ExpectedAnswer::OneOf),
        other => Err(malformed(format!(
            "unsupported answer payload: {}",
            json_kind(&other)
        ))),
    }
}

/// Build the expected answer for a quiz question from its `correct_answer`.
///
/// Numeric questions parse the stored text; an unparsable value becomes NaN,
/// which no submission can ever match.
pub fn question_answer(question: &QuizQuestion) -> ExpectedAnswer {
    match question.question_type {
        QuestionType::Numeric => {
            ExpectedAnswer::Numeric(parse_number(&question.correct_answer))
        }
        _ => ExpectedAnswer::Text(question.correct_answer.clone()),
    }
}

/// Decode a problem's hint column. A missing column is an empty list.
pub fn hints(problem: &PracticeProblem) -> Result<Vec<String>> {
    string_list(problem.hints.as_deref(), Entity::Problem, problem.id, "hints")
}

/// Decode a question's display options. A missing column is an empty list.
pub fn options(question: &QuizQuestion) -> Result<Vec<String>> {
    string_list(
        question.options.as_deref(),
        Entity::Question,
        question.id,
        "options",
    )
}

fn string_list(
    raw: Option<&str>,
    entity: Entity,
    id: i64,
    field: &'static str,
) -> Result<Vec<String>> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|e| EvalError::MalformedData {
            entity,
            id,
            field,
            reason: e.to_string(),
        }),
    }
}

/// Parse learner or stored text as a float.
///
/// Leading whitespace is skipped and the longest numeric prefix is read, so
/// `"5 cm"` is 5 and `"12.5%"` is 12.5. Text with no numeric prefix is NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    if rest.starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let prefix = &text[..numeric_prefix_len(text)];
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// Byte length of the longest `[sign] digits [. digits] [e [sign] digits]`
/// prefix of `text`. Zero when no digit is present.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut seen_digit = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || seen_digit {
            seen_digit |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !seen_digit {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
