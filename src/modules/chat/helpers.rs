pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;

const ELLIPSIS: &str = "...";

/// Trims and strips angle brackets.
pub fn sanitize_input(input: &str) -> String {
    input.trim().chars().filter(|c| *c != '<' && *c != '>').collect()
}

pub fn is_message_empty(text: &str) -> bool {
    sanitize_input(text).is_empty()
}

pub fn truncate_message(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Progressive prefixes of `text`, from the empty string to the full text,
/// one char at a time.
pub fn typing_frames(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(|(byte_index, _)| byte_index)
        .chain(std::iter::once(text.len()))
        .map(move |end| &text[..end])
}
