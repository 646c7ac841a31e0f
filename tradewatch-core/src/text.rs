/// Lowercase `text`, degrading absent values to the literal `"none"`.
/// Mirrors how the forum API reports missing flair and body fields: the
/// caller never has to handle a failure, only a fallback string.
pub fn to_lower(text: Option<&str>) -> String {
    match text {
        Some(s) => s.to_lowercase(),
        None => "none".to_string(),
    }
}

/// Split a delimiter-joined config cell into lowercase tokens.
///
/// An absent cell yields an empty list. No trimming and no empty-entry
/// removal: `"a,b,,c"` keeps its empty third token, and a trailing
/// delimiter yields a trailing empty token.
pub fn split_list(text: Option<&str>, delimiter: char) -> Vec<String> {
    match text {
        None => Vec::new(),
        Some(s) => to_lower(Some(s))
            .split(delimiter)
            .map(str::to_owned)
            .collect(),
    }
}
