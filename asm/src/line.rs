/// A source line together with its normalized code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based index in the source file
    pub idx: usize,
    pub raw: String,
    pub code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        Line {
            idx,
            raw: raw.to_string(),
            code: normalize(raw),
        }
    }

    /// A line produced from this one by macro expansion.
    pub fn derive(&self, code: String) -> Self {
        Line {
            idx: self.idx,
            raw: self.raw.clone(),
            code,
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Strip the `//` comment, whitespace and control characters.
pub fn normalize(raw: &str) -> String {
    let code = match raw.find("//") {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    code.chars().filter(|c| ('!'..='~').contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_comments() {
        assert_eq!(normalize("  D = D + 1  // increment"), "D=D+1");
        assert_eq!(normalize("\t@ 2\r"), "@2");
        assert_eq!(normalize("(LOOP) // top"), "(LOOP)");
        assert_eq!(normalize("0; JMP"), "0;JMP");
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("    "), "");
        assert_eq!(normalize("// only a comment"), "");
        assert_eq!(normalize("   //"), "");
    }

    #[test]
    fn drops_non_printable() {
        assert_eq!(normalize("M=\u{7}D\u{0}"), "M=D");
        assert_eq!(normalize("@i\u{a0}"), "@i");
        // a single slash is not a comment
        assert_eq!(normalize("@a/b"), "@a/b");
    }

    #[test]
    fn derive_keeps_position() {
        let line = Line::new(7, "M[5]=M[5]+1");
        let derived = line.derive("@5".to_string());
        assert_eq!(derived.idx, 7);
        assert_eq!(derived.no(), 8);
        assert_eq!(derived.raw, "M[5]=M[5]+1");
        assert_eq!(derived.code, "@5");
    }
}
