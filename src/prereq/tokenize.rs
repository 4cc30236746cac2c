// src/prereq/tokenize.rs
//
// Splits the raw Prerequisites markup into atomic clause tokens. Tokens
// keep their markup; link extraction happens during classification. A
// shared group id marks the two halves of an "A or B" disjunction.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub group: usize,
}

pub fn tokenize(raw: &str) -> Vec<Token> {
    let mut text = raw.trim();
    // Sentence-final punctuation on the whole clause list
    if let Some(stripped) = text.strip_suffix('.') {
        text = stripped.trim_end();
    }

    // Clause groups on ';', sub-clauses on ',', order preserved
    let mut pieces: Vec<&str> = Vec::new();
    for group in text.split(';') {
        for piece in group.split(',') {
            let piece = piece.trim();
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
    }

    // Pair disjunctions with one token of lookahead
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut next_group = 0usize;
    let mut i = 0usize;
    while i < pieces.len() {
        let piece = pieces[i];
        if i + 1 < pieces.len() {
            if let Some(second) = pieces[i + 1].strip_prefix("or ") {
                tokens.push(Token { raw: s!(piece), group: next_group });
                tokens.push(Token { raw: s!(second.trim_start()), group: next_group });
                next_group += 1;
                i += 2;
                continue;
            }
        }
        if let Some(at) = piece.find(" or ") {
            let (left, right) = (piece[..at].trim(), piece[at + 4..].trim());
            tokens.push(Token { raw: s!(left), group: next_group });
            tokens.push(Token { raw: s!(right), group: next_group });
            next_group += 1;
            i += 1;
            continue;
        }
        tokens.push(Token { raw: s!(piece), group: next_group });
        next_group += 1;
        i += 1;
    }
    tokens
}
