use log::debug;

/// Splits a line into whitespace-delimited tokens.
///
/// Runs of any whitespace count as one separator, so tabs and repeated
/// spaces are accepted. Tokens borrow from the input.
pub fn tokenize(text: &str) -> Vec<&str> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    debug!("tokenized {:?} into {} tokens", text, tokens.len());
    tokens
}
