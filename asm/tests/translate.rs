use hackasm::{assemble, error::Error, translate};

fn assert(code: &str, expects: &[&str]) {
    let source: Vec<&str> = code.lines().collect();
    for (idx, line) in source.iter().enumerate() {
        println!("{:>2}: {}", idx, line);
    }
    let words = translate(&source).unwrap();
    for (idx, word) in words.iter().enumerate() {
        println!("[{:04}] {}", idx, word);
    }
    assert_eq!(words, expects);
}

macro_rules! case {
    ($name:ident, $code:expr, [$($expect:expr),* $(,)?]) => {
        #[test]
        fn $name() {
            assert($code, &[$($expect),*]);
        }
    };
}

case!(address_numeral, "@2", ["0000000000000010"]);
case!(compute_dest, "D=D+1", ["1110011111010000"]);
case!(label_at_top, "(LOOP)\n@LOOP", ["0000000000000000"]);
case!(
    indirect_read_modify_write,
    "M[5]=M[5]+1",
    ["0000000000000101", "1111110111001000"]
);
case!(
    labeled_jump_forward,
    "@2\n0;jmp:END\nD=D+1\n(END)",
    [
        "0000000000000010",
        "0000000000000100",
        "1110101010000111",
        "1110011111010000",
    ]
);

case!(
    add_program,
    "// Computes R0 = 2 + 3
@2
D=A
@3
D=D+A
@0
M=D",
    [
        "0000000000000010",
        "1110110000010000",
        "0000000000000011",
        "1110000010010000",
        "0000000000000000",
        "1110001100001000",
    ]
);

case!(
    variables_and_builtins,
    "@i
M=1
@sum
M=0
@i
@R1
@SCREEN
@KEYBOARD",
    [
        "0000000000010000",
        "1110111111001000",
        "0000000000010001",
        "1110101010001000",
        "0000000000010000",
        "0000000000000001",
        "0100000000000000",
        "0110000000000000",
    ]
);

case!(
    countdown_with_shorthands,
    "(LOOP)
    D=M[i]          // load
    D;jeq:END
    M[i]=M[i]-1
    0;jmp:LOOP
(END)",
    [
        "0000000000010000",
        "1111110000010000",
        "0000000000001000",
        "1110001100000010",
        "0000000000010000",
        "1111110010001000",
        "0000000000000000",
        "1110101010000111",
    ]
);

case!(decrement_address, "D=A-1", ["1110110010010000"]);

case!(
    indirect_store,
    "M[R1]=D",
    ["0000000000000001", "1110001100001000"]
);

case!(
    whitespace_and_comments,
    "   // header

  @ 7   // seven
\tM = D ; JGT",
    ["0000000000000111", "1110001100001001"]
);

#[test]
fn numerals_encode_msb_first() {
    let values = (0..=u16::MAX).step_by(257).chain([1, 32767, 32768, u16::MAX]);
    for value in values {
        let words = translate(&[format!("@{value}")]).unwrap();
        assert_eq!(words, vec![format!("{:016b}", value)]);
    }
}

#[test]
fn plain_programs_keep_order() {
    let source = ["@5", "D=A", "@17", "M=D", "0;JMP", "@0"];
    let words = translate(&source).unwrap();
    assert_eq!(words.len(), source.len());
    assert_eq!(words[0], "0000000000000101");
    assert_eq!(words[2], "0000000000010001");
    assert_eq!(words[4], "1110101010000111");
    assert_eq!(words[5], "0000000000000000");
}

#[test]
fn variable_addresses_are_stable() {
    let source = ["@a", "@b", "@a", "@c", "@b", "@a"];
    let words = translate(&source).unwrap();
    let addrs: Vec<u16> = words
        .iter()
        .map(|w| u16::from_str_radix(w, 2).unwrap())
        .collect();
    assert_eq!(addrs, vec![16, 17, 16, 18, 17, 16]);
}

#[test]
fn labels_count_expanded_instructions() {
    let source = ["M[x]=D", "0;JMP:TOP", "(MID)", "D=M[y]", "(TOP)", "@MID", "@TOP"];
    let program = assemble(&source).unwrap();
    assert_eq!(program.symbols.get_val("MID"), Some(4));
    assert_eq!(program.symbols.get_val("TOP"), Some(6));
    assert_eq!(program.words.len(), 8);
    assert_eq!(program.words[6], 4);
    assert_eq!(program.words[7], 6);
}

#[test]
fn source_lines_are_tracked() {
    let source = ["// c", "D=M[i]", "", "@3"];
    let program = assemble(&source).unwrap();
    let lines: Vec<usize> = program.code.iter().map(|c| c.line.idx).collect();
    assert_eq!(lines, vec![1, 1, 3]);
}

#[test]
fn format_error_reports_source_line() {
    let source = ["@1", "(OK)", "  D=D*2  // bad"];
    match assemble(&source).unwrap_err() {
        Error::Format { line, text, .. } => {
            assert_eq!(line, 2);
            assert_eq!(text, "  D=D*2  // bad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn combined_shorthands_are_rejected() {
    let err = assemble(&["M[i]=D;JMP:END", "(END)"]).unwrap_err();
    assert!(matches!(err, Error::Format { line: 0, .. }));
}

#[test]
fn malformed_brackets_are_rejected() {
    for bad in ["M[=D", "D=M[]", "M[1]=M[2]", "@M[3]"] {
        let err = assemble(&["@0", bad]).unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }), "{bad}: {err:?}");
    }
}

#[test]
fn empty_source() {
    let empty: [&str; 0] = [];
    assert!(translate(&empty).unwrap().is_empty());
    assert!(translate(&["", "// nothing"]).unwrap().is_empty());
}
