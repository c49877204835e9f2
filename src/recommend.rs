//! Recommended password derivation from the Base64 encoding.

use crate::types::EncodingResultSet;

pub const DEFAULT_LIMIT: i64 = 12;

/// How the symbol is applied to the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPolicy {
    /// Truncate the symbol-suffixed Base64, then append the symbol again.
    #[default]
    Repeat,
    /// Truncate the bare Base64, then append the symbol once.
    Once,
}

/// `None` and zero fall back to [`DEFAULT_LIMIT`].
pub fn effective_limit(limit: Option<i64>) -> i64 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(n) => n,
    }
}

/// Leading-character prefix of `s`. A negative `limit` drops that many
/// characters from the end instead.
pub fn truncate_chars(s: &str, limit: i64) -> &str {
    let total = s.chars().count();
    let keep = if limit >= 0 {
        (limit as usize).min(total)
    } else {
        total.saturating_sub(limit.unsigned_abs() as usize)
    };
    match s.char_indices().nth(keep) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncates `base64_encoded` (which already carries any symbol suffix) and
/// appends `symbol`.
pub fn recommend(base64_encoded: &str, limit: Option<i64>, symbol: &str) -> String {
    let mut out = truncate_chars(base64_encoded, effective_limit(limit)).to_string();
    out.push_str(symbol);
    out
}

pub fn recommend_from(
    results: &EncodingResultSet,
    limit: Option<i64>,
    symbol: &str,
    policy: SymbolPolicy,
) -> String {
    let base = match policy {
        SymbolPolicy::Repeat => results.base64(),
        SymbolPolicy::Once => strip_symbol(results.base64(), symbol),
    };
    recommend(base, limit, symbol)
}

fn strip_symbol<'a>(value: &'a str, symbol: &str) -> &'a str {
    if symbol.is_empty() {
        return value;
    }
    value.strip_suffix(symbol).unwrap_or(value)
}
