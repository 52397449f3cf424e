//! Statement splitting and classification.

use crate::lexer::{tokenize, Span, Token};

/// The kind of a SQL statement, decided by its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `SELECT ...`, including `WITH ... SELECT ...`.
    Select,
    /// `INSERT ...`.
    Insert,
    /// `UPDATE ...`.
    Update,
    /// `DELETE ...`.
    Delete,
    /// `MERGE ...`.
    Merge,
    /// `REPLACE ...`.
    Replace,
    /// `CREATE ...`.
    Create,
    /// `ALTER ...`.
    Alter,
    /// `DROP ...`.
    Drop,
    /// `TRUNCATE ...`.
    Truncate,
    /// Anything else, including empty input.
    Unknown,
}

impl StatementKind {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "SELECT" => Self::Select,
            "INSERT" => Self::Insert,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "MERGE" => Self::Merge,
            "REPLACE" => Self::Replace,
            "CREATE" => Self::Create,
            "ALTER" => Self::Alter,
            "DROP" => Self::Drop,
            "TRUNCATE" => Self::Truncate,
            _ => Self::Unknown,
        }
    }
}

/// Split a SQL script into individual statements.
///
/// Statements are separated by top-level `;`. Statements consisting only of
/// whitespace and comments are dropped, trailing comments are stripped and
/// the result is trimmed. If nothing remains a single empty statement is
/// returned, so the result is never empty.
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current: Vec<(Token<'_>, Span)> = Vec::new();
    let mut depth = 0usize;

    for (token, span) in tokenize(sql) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Semicolon if depth == 0 => {
                statements.extend(finish_statement(sql, &current));
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push((token, span));
    }
    statements.extend(finish_statement(sql, &current));

    if statements.is_empty() {
        statements.push(String::new());
    }
    statements
}

/// Slice one statement out of the source, without trailing comments.
/// Returns `None` for statements that hold nothing but comments.
fn finish_statement(sql: &str, tokens: &[(Token<'_>, Span)]) -> Option<String> {
    let last = tokens.iter().rposition(|(token, _)| !token.is_comment())?;
    let start = tokens[0].1.start;
    let end = tokens[last].1.end;
    Some(sql[start..end].trim().to_string())
}

/// Join statements back into a script.
pub fn combine_sql_statements<S: AsRef<str>>(statements: &[S]) -> String {
    statements
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(";\n")
}

/// Classify a single statement.
///
/// Leading comments and opening parentheses are skipped. For `WITH` the
/// kind is taken from the first top-level statement keyword after the
/// common table expressions.
pub fn statement_kind(statement: &str) -> StatementKind {
    let tokens = tokenize(statement);
    let mut significant = tokens
        .iter()
        .map(|(token, _)| *token)
        .filter(|token| !token.is_comment())
        .skip_while(|token| *token == Token::LParen);

    let Some(first) = significant.next().and_then(|token| token.keyword()) else {
        return StatementKind::Unknown;
    };
    if first != "WITH" {
        return StatementKind::from_keyword(&first);
    }

    let mut depth = 0usize;
    for token in significant {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Some(keyword) = token.keyword() {
                    let kind = StatementKind::from_keyword(&keyword);
                    if kind != StatementKind::Unknown {
                        return kind;
                    }
                }
            }
            _ => {}
        }
    }
    StatementKind::Unknown
}

/// Find the last keyword that is not nested inside parentheses.
pub fn last_top_level_keyword(statement: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut last = None;
    for (token, _) in tokenize(statement) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Some(keyword) = token.keyword() {
                    last = Some(keyword);
                }
            }
            _ => {}
        }
    }
    last
}
