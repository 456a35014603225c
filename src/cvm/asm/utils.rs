use crate::cvm::instruction::Word;

/// Numbered, comment-stripped, trimmed, non-empty source lines.
pub(crate) fn preprocess(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| {
            let l = l.split('#').next().unwrap_or(l);
            (i, l.trim())
        })
        .filter(|(_, l)| !l.is_empty())
        .collect()
}

/// One source line split into mnemonic, optional operand, and whatever is
/// left over (which the caller rejects).
pub(crate) struct Tokens<'a> {
    pub head: &'a str,
    pub operand: Option<&'a str>,
    pub rest: Option<&'a str>,
}

pub(crate) fn tokenize(line: &str) -> Tokens<'_> {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("");
    let operand = parts.next();
    let rest = parts.next();
    Tokens {
        head,
        operand,
        rest,
    }
}

pub(crate) fn label_name(tok: &str) -> Option<&str> {
    tok.strip_suffix(':')
}

/// Decimal or `0x` hex, optionally signed.
pub(crate) fn parse_word(s: &str) -> Option<Word> {
    let s = s.trim();
    let (neg, body) = match s.strip_prefix('-') {
        Some(b) => (true, b),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let v = i128::from_str_radix(hex, 16).ok()?;
        let v = if neg { -v } else { v };
        return Word::try_from(v).ok();
    }
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<Word>().ok()
}
