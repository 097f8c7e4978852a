//! Lightweight text features shared by the extractors: folding, phrase
//! lookup, sentence splitting, and negation/intensity context windows.

/// Replace typographic punctuation with ASCII and collapse whitespace.
///
/// Turn text goes through this once at segmentation so that [`fold`] keeps
/// byte offsets aligned with the stored text.
pub fn normalize_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => "'".to_string(),
            '\u{201C}' | '\u{201D}' => "\"".to_string(),
            '\u{2013}' | '\u{2014}' => " - ".to_string(),
            other => other.to_string(),
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-fold for matching. ASCII-only so offsets stay valid for the source.
pub fn fold(text: &str) -> String {
    text.to_ascii_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// All whole-word occurrences of `needle` in `haystack` as byte ranges.
///
/// Both sides are expected to be folded already.
pub fn find_phrase(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    if needle.is_empty() {
        return spans;
    }
    let mut start_pos = 0;
    while let Some(pos) = haystack[start_pos..].find(needle) {
        let start = start_pos + pos;
        let end = start + needle.len();
        let before_ok = !needle.starts_with(is_word_char)
            || haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after_ok = !needle.ends_with(is_word_char)
            || haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            spans.push((start, end));
            start_pos = end;
        } else {
            start_pos = start + needle.chars().next().map_or(1, char::len_utf8);
        }
    }
    spans
}

pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    !find_phrase(haystack, needle).is_empty()
}

/// Byte ranges of coarse sentences, trimmed. Terminal punctuation is kept.
pub fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                let end = i + c.len_utf8();
                push_trimmed(text, start, end, &mut spans);
                start = end;
            }
        }
    }
    push_trimmed(text, start, text.len(), &mut spans);
    spans
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let slice = &text[start..end];
    let lead = slice.len() - slice.trim_start().len();
    let trail = slice.len() - slice.trim_end().len();
    if start + lead < end - trail {
        spans.push((start + lead, end - trail));
    }
}

/// Split text into coarse sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect()
}

fn is_clause_break(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?')
}

fn clean_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
}

/// Up to `n` words preceding `pos` within the same clause.
pub fn preceding_words(folded: &str, pos: usize, n: usize) -> Vec<&str> {
    let head = &folded[..pos];
    let clause_start = head
        .char_indices()
        .rev()
        .find(|(_, c)| is_clause_break(*c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let words: Vec<&str> = head[clause_start..]
        .split_whitespace()
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .collect();
    let skip = words.len().saturating_sub(n);
    words[skip..].to_vec()
}

/// Up to `n` words following `pos` within the same clause.
pub fn following_words(folded: &str, pos: usize, n: usize) -> Vec<&str> {
    let tail = &folded[pos..];
    let clause_end = tail
        .char_indices()
        .find(|(_, c)| is_clause_break(*c))
        .map_or(tail.len(), |(i, _)| i);
    tail[..clause_end]
        .split_whitespace()
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .take(n)
        .collect()
}

/// Whether any negation cue sits in the `window` words before `start`.
pub fn is_negated(folded: &str, start: usize, negations: &[String], window: usize) -> bool {
    let context = preceding_words(folded, start, window).join(" ");
    negations.iter().any(|cue| contains_phrase(&context, cue))
}

/// Whether an intensity cue sits within `window` words either side of a match.
pub fn is_intensified(
    folded: &str,
    start: usize,
    end: usize,
    intensifiers: &[String],
    window: usize,
) -> bool {
    let before = preceding_words(folded, start, window).join(" ");
    let after = following_words(folded, end, window).join(" ");
    intensifiers
        .iter()
        .any(|cue| contains_phrase(&before, cue) || contains_phrase(&after, cue))
}

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
