//! Identifier casing helpers.
//!
//! # Design
//!
//! These are total functions over arbitrary strings — no charset validation,
//! no errors. Non-letter characters pass through verbatim (case-folded when
//! applicable). File and module names everywhere else in the crate are
//! derived from [`camel_to_snake`], so its exact output shape is a
//! compatibility contract with previously generated trees.

/// Convert a CamelCase identifier to snake_case.
///
/// Every uppercase character that is not the first character gets an
/// underscore inserted before it, then the whole string is lower-cased.
/// Consecutive uppercase letters each count as a boundary, so an acronym
/// splits letter by letter: `HTTPServer` becomes `h_t_t_p_server`. Generated
/// trees depend on that spelling; do not "fix" it to group acronyms.
pub fn camel_to_snake(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() && index != 0 {
            snake.push('_');
        }
        snake.extend(ch.to_lowercase());
    }
    snake
}

/// Best-effort English pluralization for table names.
///
/// Covers the regular noun endings; irregular nouns come out regular
/// (`person` → `persons`). Only used for `__tablename__` in the model
/// template, where a regular plural is acceptable.
pub fn pluralize(noun: &str) -> String {
    if noun.is_empty() {
        return String::new();
    }

    if let Some(stem) = noun.strip_suffix('y') {
        // city → cities, but day → days
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }

    let needs_es = noun.ends_with('s')
        || noun.ends_with('x')
        || noun.ends_with('z')
        || noun.ends_with("ch")
        || noun.ends_with("sh");

    if needs_es {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}
