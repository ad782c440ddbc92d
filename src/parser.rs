/// One instruction line split into mnemonic and raw operand tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub mnemonic: String,
    pub operands: Vec<String>,
}

impl ParsedInstruction {
    /// Operand at `idx`, or `""` when the line has fewer operands.
    pub fn operand(&self, idx: usize) -> &str {
        self.operands.get(idx).map(String::as_str).unwrap_or("")
    }
}

// Separators are ASCII only: space, \t, \n, \x0b, \x0c, \r.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

// Trimming drops every control character and space at either end.
fn is_trimmed(c: char) -> bool {
    c <= ' '
}

/// Splits `line` on its first whitespace run, then splits the operand text on
/// commas after dropping all whitespace. Token syntax is not checked here.
pub fn parse(line: &str) -> ParsedInstruction {
    let line = line.trim_matches(is_trimmed);
    let (mnemonic, rest) = match line.split_once(is_separator) {
        Some((mn, rest)) => (mn, rest),
        None => (line, ""),
    };
    let packed: String = rest.chars().filter(|&c| !is_separator(c)).collect();
    let operands = if packed.is_empty() {
        Vec::new()
    } else {
        packed.split(',').map(str::to_string).collect()
    };
    tracing::trace!(mnemonic, ?operands, "parsed line");
    ParsedInstruction {
        mnemonic: mnemonic.to_string(),
        operands,
    }
}
