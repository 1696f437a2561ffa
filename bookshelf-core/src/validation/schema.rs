//! Schemas for the book payload, the list filter and the path id

use super::Violation;
use crate::error::ValidationError;
use crate::types::{BookFilter, NewBook};
use chrono::Datelike;
use serde_json::{Map, Value};

/// Keys accepted in a book payload, in declaration order
pub const BOOK_FIELDS: [&str; 8] = [
    "name",
    "year",
    "author",
    "summary",
    "publisher",
    "pageCount",
    "readPage",
    "reading",
];

const FILTER_FIELDS: [&str; 3] = ["name", "reading", "finished"];
const FLAG_VALUES: [&str; 2] = ["0", "1"];

const MIN_YEAR: i64 = 1900;

/// Upper bound for `year`, taken from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Validate a create/update body
///
/// `body` is the parsed JSON document. Numeric strings are accepted for
/// integer fields and `"true"`/`"false"` for `reading`. All violations are
/// collected before returning.
pub fn validate_book(body: &Value, current_year: i32) -> Result<NewBook, ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::single(Violation::not_object()));
    };

    let mut violations = Vec::new();

    let name = string_field(object, "name", &mut violations);
    let year = integer_field(
        object,
        "year",
        MIN_YEAR,
        i64::from(current_year),
        &mut violations,
    );
    let author = string_field(object, "author", &mut violations);
    let summary = string_field(object, "summary", &mut violations);
    let publisher = string_field(object, "publisher", &mut violations);
    let page_count = integer_field(object, "pageCount", 1, i64::from(u32::MAX), &mut violations);
    let read_page = integer_field(object, "readPage", 0, i64::from(u32::MAX), &mut violations);
    if let (Some(page_count), Some(read_page)) = (page_count, read_page) {
        if read_page > page_count {
            violations.push(Violation::exceeds("readPage", "pageCount"));
        }
    }
    let reading = boolean_field(object, "reading", &mut violations);

    for key in object.keys() {
        if !BOOK_FIELDS.contains(&key.as_str()) {
            violations.push(Violation::not_allowed(key));
        }
    }

    match (name, year, author, summary, publisher, page_count, read_page, reading) {
        (
            Some(name),
            Some(year),
            Some(author),
            Some(summary),
            Some(publisher),
            Some(page_count),
            Some(read_page),
            Some(reading),
        ) if violations.is_empty() => Ok(NewBook {
            name,
            // bounded by the range checks above
            year: year as i32,
            author,
            summary,
            publisher,
            page_count: page_count as u32,
            read_page: read_page as u32,
            reading,
        }),
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validate the list query string
///
/// `pairs` keeps the order and repetition of the raw query. A key given more
/// than once is treated as a list and rejected.
pub fn validate_filter(pairs: &[(String, String)]) -> Result<BookFilter, ValidationError> {
    let mut violations = Vec::new();

    let name = query_value(pairs, "name", &mut violations).and_then(|value| {
        if value.is_empty() {
            violations.push(Violation::empty("name"));
            None
        } else {
            Some(value.to_string())
        }
    });
    let reading = flag_value(pairs, "reading", &mut violations);
    let finished = flag_value(pairs, "finished", &mut violations);

    let mut seen: Vec<&str> = Vec::new();
    for (key, _) in pairs {
        if !FILTER_FIELDS.contains(&key.as_str()) && !seen.contains(&key.as_str()) {
            seen.push(key.as_str());
            violations.push(Violation::not_allowed(key));
        }
    }

    if violations.is_empty() {
        Ok(BookFilter {
            name,
            reading,
            finished,
        })
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Validate the `{id}` path parameter
pub fn validate_book_id(id: &str) -> Result<&str, ValidationError> {
    if id.is_empty() {
        Err(ValidationError::single(Violation::empty("id")))
    } else {
        Ok(id)
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match object.get(field) {
        None => {
            violations.push(Violation::required(field));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(Violation::empty(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(Violation::not_string(field));
            None
        }
    }
}

fn integer_field(
    object: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    violations: &mut Vec<Violation>,
) -> Option<i64> {
    let Some(value) = object.get(field) else {
        violations.push(Violation::required(field));
        return None;
    };
    let Some(number) = as_number(value) else {
        violations.push(Violation::not_number(field));
        return None;
    };

    let before = violations.len();
    if number.fract() != 0.0 {
        violations.push(Violation::not_integer(field));
    }
    if number < min as f64 {
        violations.push(Violation::min(field, min));
    }
    if number > max as f64 {
        violations.push(Violation::max(field, max));
    }

    if violations.len() == before {
        Some(number as i64)
    } else {
        None
    }
}

fn boolean_field(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<bool> {
    match object.get(field) {
        None => {
            violations.push(Violation::required(field));
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Some(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Some(false),
        Some(_) => {
            violations.push(Violation::not_boolean(field));
            None
        }
    }
}

/// JSON numbers, or strings holding a finite decimal number
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn query_value<'a>(
    pairs: &'a [(String, String)],
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    let mut values = pairs.iter().filter(|(key, _)| key == field);
    let first = values.next()?;
    if values.next().is_some() {
        violations.push(Violation::not_string(field));
        return None;
    }
    Some(first.1.as_str())
}

fn flag_value(
    pairs: &[(String, String)],
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<bool> {
    match query_value(pairs, field, violations)? {
        "1" => Some(true),
        "0" => Some(false),
        _ => {
            violations.push(Violation::not_one_of(field, &FLAG_VALUES));
            None
        }
    }
}
