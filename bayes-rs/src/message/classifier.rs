//! Header/line classification state machine
//!
//! Decides, line by line, what part of a message a line belongs to
//! and whether any of it reaches the tokenizer. Header fields other
//! than `From:`, `To:` and `Subject:` carry routing noise rather
//! than signal and are discarded whole.

/// How the source should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Mailbox-style input: messages separated by `From ` postmark
    /// lines, starting with one.
    Mailbox,
    /// A single message with no postmark line.
    SingleMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectPostmark,
    InHeader,
    InBody,
}

/// What to do with one classified line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// A postmark: a new message begins. The line itself is not
    /// tokenized.
    BeginMessage,
    /// Nothing in this line reaches the tokenizer.
    Discard,
    /// Forward this text to the tokenizer.
    Tokenize(&'a str),
}

/// Line classifier. Driven until the input is exhausted; there is no
/// terminal state.
pub struct LineClassifier {
    state: State,
}

impl LineClassifier {
    pub fn new(mode: SourceMode) -> Self {
        let state = match mode {
            SourceMode::Mailbox => State::ExpectPostmark,
            SourceMode::SingleMessage => State::InHeader,
        };
        Self { state }
    }

    /// Classifies one line and advances the state machine.
    pub fn classify<'a>(&mut self, line: &'a str) -> LineAction<'a> {
        if self.state == State::ExpectPostmark {
            self.state = State::InHeader;
            let (word, _) = first_word(line);
            // The postmark word is `From` without a colon; `From:` is
            // an ordinary header field.
            if word == "From" {
                return LineAction::BeginMessage;
            }
            // Single-message fallback: treat the line as header text.
        }

        match self.state {
            State::ExpectPostmark => unreachable!("postmark state resolved above"),
            State::InHeader => {
                if line.is_empty() {
                    self.state = State::InBody;
                    return LineAction::Discard;
                }
                let (word, body) = first_word(line);
                match word {
                    "From:" | "To:" | "Subject:" => LineAction::Tokenize(body),
                    _ => LineAction::Discard,
                }
            }
            State::InBody => {
                if line.is_empty() {
                    // The next line may be the postmark of the next
                    // message; harmless when none follows.
                    self.state = State::ExpectPostmark;
                    return LineAction::Discard;
                }
                LineAction::Tokenize(line)
            }
        }
    }
}

/// Splits a line into its first space-delimited word and the rest.
fn first_word(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postmark_begins_message_and_is_discarded() {
        let mut lc = LineClassifier::new(SourceMode::Mailbox);
        assert_eq!(
            lc.classify("From spammer@example.com Fri Jan 09 04:11:20 2004"),
            LineAction::BeginMessage
        );
        // Now inside the header.
        assert_eq!(
            lc.classify("Subject: cheap meds"),
            LineAction::Tokenize("cheap meds")
        );
    }

    #[test]
    fn test_from_with_colon_is_not_a_postmark() {
        let mut lc = LineClassifier::new(SourceMode::Mailbox);
        // Not a postmark; the fallback lands in the header and the
        // same line is processed as a kept header field.
        assert_eq!(
            lc.classify("From: someone@example.com"),
            LineAction::Tokenize("someone@example.com")
        );
        // No message was begun, and we are in the header now.
        assert_eq!(lc.classify("Received: by mx"), LineAction::Discard);
    }

    #[test]
    fn test_header_keeps_only_from_to_subject() {
        let mut lc = LineClassifier::new(SourceMode::SingleMessage);
        assert_eq!(lc.classify("To: you@example.com"), LineAction::Tokenize("you@example.com"));
        assert_eq!(lc.classify("Received: by mx.example.com"), LineAction::Discard);
        assert_eq!(lc.classify("X-Mailer: spamblaster 3000"), LineAction::Discard);
        assert_eq!(
            lc.classify("Subject: hello there"),
            LineAction::Tokenize("hello there")
        );
    }

    #[test]
    fn test_blank_line_moves_header_to_body() {
        let mut lc = LineClassifier::new(SourceMode::SingleMessage);
        assert_eq!(lc.classify("Subject: x"), LineAction::Tokenize("x"));
        assert_eq!(lc.classify(""), LineAction::Discard);
        assert_eq!(lc.classify("body text here"), LineAction::Tokenize("body text here"));
    }

    #[test]
    fn test_blank_body_line_rearms_postmark_detection() {
        let mut lc = LineClassifier::new(SourceMode::Mailbox);
        assert_eq!(lc.classify("From a@example.com"), LineAction::BeginMessage);
        assert_eq!(lc.classify(""), LineAction::Discard);
        assert_eq!(lc.classify("first body"), LineAction::Tokenize("first body"));
        assert_eq!(lc.classify(""), LineAction::Discard);
        assert_eq!(lc.classify("From b@example.com"), LineAction::BeginMessage);
    }

    #[test]
    fn test_whitespace_only_line_is_not_blank() {
        let mut lc = LineClassifier::new(SourceMode::SingleMessage);
        lc.classify("");
        // A line of spaces is still a body line, not a separator.
        assert_eq!(lc.classify("   "), LineAction::Tokenize("   "));
    }
}
