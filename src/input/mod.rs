//! Calculator-style amount entry: a constrained `+`/`-` evaluator and the
//! keypad buffer it backs.

/// Evaluates a `+`/`-` integer expression the way the entry pad does.
///
/// Everything other than ASCII digits and operators is stripped first; an
/// empty remainder evaluates to `"0"`, and one dangling trailing operator is
/// ignored. A well-formed remainder is folded left to right and returned as
/// a plain decimal string. Anything else, including consecutive operators
/// and sums that overflow `i64`, returns the input unchanged.
pub fn evaluate(expr: &str) -> String {
    let sanitized: String = expr
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == '-')
        .collect();
    if sanitized.is_empty() {
        return "0".to_string();
    }
    let trimmed = sanitized
        .strip_suffix('+')
        .or_else(|| sanitized.strip_suffix('-'))
        .unwrap_or(&sanitized);
    match eval_sum(trimmed) {
        Some(value) => value.to_string(),
        None => expr.to_string(),
    }
}

/// Left-to-right fold of `INT (('+'|'-') INT)*` with one optional leading
/// sign. `None` for anything outside that grammar or overflowing `i64`.
fn eval_sum(expr: &str) -> Option<i64> {
    let (negative, rest) = match expr.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, expr.strip_prefix('+').unwrap_or(expr)),
    };

    let (first, mut rest) = take_int(rest)?;
    let mut total = if negative { first.checked_neg()? } else { first };

    while !rest.is_empty() {
        let op = rest.chars().next()?;
        let (term, tail) = take_int(&rest[1..])?;
        total = match op {
            '+' => total.checked_add(term)?,
            '-' => total.checked_sub(term)?,
            _ => return None,
        };
        rest = tail;
    }
    Some(total)
}

/// Splits a leading digit run off `expr` and parses it as `i64`.
fn take_int(expr: &str) -> Option<(i64, &str)> {
    let end = expr
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(expr.len());
    if end == 0 {
        return None;
    }
    let (digits, rest) = expr.split_at(end);
    digits.parse::<i64>().ok().map(|value| (value, rest))
}

/// One press on the entry pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit key, 0 through 9. Larger values are clamped to 9.
    Digit(u8),
    Plus,
    Minus,
    /// `C`: reset the buffer to `"0"`.
    Clear,
    /// Backspace: drop the last character, never emptying the buffer.
    Delete,
    /// `=`: collapse the buffer through [`evaluate`].
    Equals,
}

/// Running amount-entry buffer behind the keypad.
///
/// The buffer always holds at least one character and starts at `"0"`. A
/// digit pressed on a lone `"0"` replaces it instead of appending, so
/// amounts never grow leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    buffer: String,
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::new()
    }
}

impl AmountInput {
    /// Fresh buffer showing `"0"`.
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
        }
    }

    /// Buffer seeded with an existing amount, for the edit flow.
    pub fn from_amount(amount: i64) -> Self {
        Self {
            buffer: amount.to_string(),
        }
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Applies one key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Clear => self.buffer = "0".to_string(),
            Key::Delete => {
                self.buffer.pop();
                if self.buffer.is_empty() {
                    self.buffer.push('0');
                }
            }
            Key::Equals => self.buffer = evaluate(&self.buffer),
            Key::Digit(digit) => {
                if self.buffer == "0" {
                    self.buffer.clear();
                }
                self.buffer.push(char::from(b'0' + digit.min(9)));
            }
            Key::Plus => self.buffer.push('+'),
            Key::Minus => self.buffer.push('-'),
        }
    }

    /// Evaluates the buffer and parses the result as a whole-yen amount.
    /// `None` when the buffer does not collapse to an integer.
    pub fn resolve(&self) -> Option<i64> {
        evaluate(&self.buffer).parse().ok()
    }
}
