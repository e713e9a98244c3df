pub mod alu;
pub mod cond;
pub mod inst;
pub mod reg;

/// Width of a machine word in bits.
pub const WORD_SIZE: usize = 16;

/// Render a machine word as a binary word, most significant bit first.
pub fn word(bin: u16) -> String {
    format!("{:0width$b}", bin, width = WORD_SIZE)
}

#[test]
fn test_word() {
    assert_eq!(word(2), "0000000000000010");
    assert_eq!(word(0), "0000000000000000");
    assert_eq!(word(0xFFFF), "1111111111111111");
    assert_eq!(word(16384), "0100000000000000");
}
