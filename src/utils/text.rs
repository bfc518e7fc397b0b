// ABOUTME: Text helpers for user-facing labels
// ABOUTME: Title-cases free-text food queries for names and confirmations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Title-case `input`: every letter that follows a non-letter is uppercased,
/// every other letter lowercased
///
/// `"greek yogurt"` becomes `"Greek Yogurt"`, `"o'neil's"` becomes `"O'Neil'S"`.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
