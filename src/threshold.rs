use crate::error::CheckError;
use crate::status::Status;

/// Comparison operator between the signal and a numeric bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    fn from_text(text: &str) -> Option<Self> {
        match text {
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            "==" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            _ => None,
        }
    }

    /// The same comparison with its operands swapped.
    fn mirrored(self) -> Self {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            CompareOp::Eq | CompareOp::Ne => self,
        }
    }

    fn compare(self, value: f64, threshold: f64) -> bool {
        match self {
            CompareOp::Lt => value < threshold,
            CompareOp::Le => value <= threshold,
            CompareOp::Gt => value > threshold,
            CompareOp::Ge => value >= threshold,
            CompareOp::Eq => value == threshold,
            CompareOp::Ne => value != threshold,
        }
    }
}

/// A boundary test parsed once at configuration time: a comparison between
/// `value` (the extracted signal) and `threshold` (the stored bound).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdExpression {
    pub op: CompareOp,
    pub bound: f64,
}

impl ThresholdExpression {
    /// Parse a threshold expression from free-form text.
    ///
    /// Accepted forms: `value > 5`, `5 < value` (operator mirrored), or a
    /// bare number `5`, which keeps the `value >= 5` reading of plain
    /// numeric bounds. Anything else is rejected.
    pub fn parse(text: &str) -> Result<Self, CheckError> {
        let tokens = tokenize(text)?;
        match tokens.as_slice() {
            [Token::Number(bound)] => Ok(ThresholdExpression {
                op: CompareOp::Ge,
                bound: *bound,
            }),
            [Token::Value, Token::Op(op), Token::Number(bound)] => Ok(ThresholdExpression {
                op: *op,
                bound: *bound,
            }),
            [Token::Number(bound), Token::Op(op), Token::Value] => Ok(ThresholdExpression {
                op: op.mirrored(),
                bound: *bound,
            }),
            _ => Err(CheckError::Expression {
                message: format!("cannot parse threshold expression {:?}", text),
            }),
        }
    }

    /// Evaluate the comparison with `value` bound to the signal.
    pub fn evaluate(&self, signal: f64) -> bool {
        self.op.compare(signal, self.bound)
    }
}

/// Decide the status for a signal. The critical boundary is tested first;
/// a triggered critical wins over any warning. An untriggered critical
/// still falls through to the warning test.
pub fn evaluate(
    signal: f64,
    critical: Option<&ThresholdExpression>,
    warning: Option<&ThresholdExpression>,
) -> Status {
    if let Some(critical) = critical
        && critical.evaluate(signal)
    {
        return Status::Critical;
    }
    if let Some(warning) = warning
        && warning.evaluate(signal)
    {
        return Status::Warning;
    }
    Status::Ok
}

#[derive(Debug, Clone, Copy)]
enum Token {
    Value,
    Op(CompareOp),
    Number(f64),
}

fn tokenize(text: &str) -> Result<Vec<Token>, CheckError> {
    let mut tokens = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let (token, len) = next_token(rest).ok_or_else(|| CheckError::Expression {
            message: format!("unexpected input at {:?}", rest),
        })?;
        tokens.push(token);
        rest = rest[len..].trim_start();
    }
    if tokens.is_empty() {
        return Err(CheckError::Expression {
            message: "empty threshold expression".to_string(),
        });
    }
    Ok(tokens)
}

fn next_token(input: &str) -> Option<(Token, usize)> {
    // Two-character operators before their one-character prefixes.
    for op_text in ["<=", ">=", "==", "!=", "<", ">"] {
        if input.starts_with(op_text) {
            let op = CompareOp::from_text(op_text)?;
            return Some((Token::Op(op), op_text.len()));
        }
    }

    if let Some(rest) = input.strip_prefix("value") {
        // Reject identifiers that merely start with "value".
        if rest
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_')
        {
            return Some((Token::Value, "value".len()));
        }
        return None;
    }

    let end = input
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(input.len());
    if end > 0
        && let Ok(number) = input[..end].parse::<f64>()
    {
        return Some((Token::Number(number), end));
    }

    None
}
