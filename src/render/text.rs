// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Width in character cells. One cell per `char`.
pub(crate) fn cell_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` cells, marking the cut with `…`. Newlines and tabs are
/// flattened to spaces so a label always stays on one row.
pub(crate) fn fit_label(text: &str, max: usize) -> String {
    let flat = text.chars().map(|ch| if ch.is_control() { ' ' } else { ch });
    if cell_len(text) <= max {
        return flat.collect();
    }
    match max {
        0 => String::new(),
        _ => flat.take(max - 1).chain(std::iter::once('…')).collect(),
    }
}

/// Escapes the five XML special characters.
pub(crate) fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fixed-precision SVG number: at most three decimals, no trailing zeros, no `-0`.
pub(crate) fn svg_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
