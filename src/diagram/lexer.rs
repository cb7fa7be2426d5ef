use crate::error::{DcResult, DistCalcError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// Text copied to the output unchanged.
    Literal(&'t str),
    /// Raw text between `{` and `}`; `offset` is the byte position of the `{`.
    Placeholder { body: &'t str, offset: usize },
}

/// Splits a template into literal runs and placeholder bodies.
///
/// A `}` with no opening brace is ordinary text. A `{` with no closing brace
/// fails the whole template.
pub fn tokenize(template: &str) -> DcResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut pos = 0;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            tokens.push(Token::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or(DistCalcError::MalformedTemplate { offset: pos + open })?;

        tokens.push(Token::Placeholder {
            body: &after[..close],
            offset: pos + open,
        });

        let consumed = open + 1 + close + 1;
        rest = &rest[consumed..];
        pos += consumed;
    }

    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    Ok(tokens)
}
