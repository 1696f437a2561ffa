//! Picking one client-facing message out of many violations

use crate::error::ValidationError;

/// Which write the failure message should describe
///
/// Only `POST` is reported as an add; every other method uses the update wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureContext {
    Create,
    Update,
}

impl FailureContext {
    /// Map a request method (any case) onto a context
    pub fn from_method(method: &str) -> Self {
        if method.eq_ignore_ascii_case("post") {
            Self::Create
        } else {
            Self::Update
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Create => "menambahkan",
            Self::Update => "memperbarui",
        }
    }
}

/// One entry of a message policy: when `applies` holds, `message` wins
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&ValidationError) -> bool,
    pub message: fn(FailureContext) -> String,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

fn touches_name(err: &ValidationError) -> bool {
    err.touches("name")
}

fn touches_read_page(err: &ValidationError) -> bool {
    err.touches("readPage")
}

fn missing_name(context: FailureContext) -> String {
    format!("Gagal {} buku. Mohon isi nama buku", context.verb())
}

fn read_page_too_large(context: FailureContext) -> String {
    format!(
        "Gagal {} buku. readPage tidak boleh lebih besar dari pageCount",
        context.verb()
    )
}

/// Name first, then readPage
pub static STANDARD_RULES: &[Rule] = &[
    Rule {
        name: "name",
        applies: touches_name,
        message: missing_name,
    },
    Rule {
        name: "readPage",
        applies: touches_read_page,
        message: read_page_too_large,
    },
];

const FALLBACK_MESSAGE: &str = "Invalid request";

/// Ordered rules evaluated top-down; the first match picks the message
///
/// When nothing matches, the first declared violation speaks for itself.
#[derive(Debug, Clone, Copy)]
pub struct MessagePolicy {
    rules: &'static [Rule],
}

impl Default for MessagePolicy {
    fn default() -> Self {
        Self::new(STANDARD_RULES)
    }
}

impl MessagePolicy {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Choose the message for a failed request
    pub fn select(&self, context: FailureContext, err: &ValidationError) -> String {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(err))
            .map(|rule| (rule.message)(context))
            .or_else(|| err.first().map(|v| v.message.clone()))
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }
}
