// Sentence Splitting
// Terminal-punctuation splitter used by the per-sentence structural transforms.

/// Split text into sentences on `.`, `!`, `?`, keeping the punctuation with
/// each sentence. Decimal points inside numbers do not split.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        buffer.push(ch);

        if ['.', '!', '?'].contains(&ch) {
            // Decimal numbers like 3.14 stay intact
            if ch == '.'
                && i > 0
                && i < chars.len() - 1
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit()
            {
                i += 1;
                continue;
            }

            // Absorb a run of terminal punctuation ("...", "?!")
            while i + 1 < chars.len() && ['.', '!', '?'].contains(&chars[i + 1]) {
                i += 1;
                buffer.push(chars[i]);
            }

            let sentence = buffer.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            buffer.clear();
        }

        i += 1;
    }

    let remaining = buffer.trim().to_string();
    if !remaining.is_empty() {
        sentences.push(remaining);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_terminal_punctuation() {
        let sentences = split_sentences("First one. Second one! Third one?");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third one?"]);
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        let sentences = split_sentences("Growth hit 3.5 percent. Costs fell.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Growth hit 3.5 percent.");
    }

    #[test]
    fn test_ellipsis_stays_with_sentence() {
        let sentences = split_sentences("It lingered... Then it was gone.");
        assert_eq!(sentences[0], "It lingered...");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_trailing_fragment_kept() {
        let sentences = split_sentences("A full sentence. a trailing fragment");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "a trailing fragment");
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
