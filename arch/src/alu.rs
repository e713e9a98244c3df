use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt;

// a-bit followed by c1..c6
static COMP_BIN: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    map.insert("0", 0b0101010);
    map.insert("1", 0b0111111);
    map.insert("-1", 0b0111010);
    map.insert("D", 0b0001100);
    map.insert("A", 0b0110000);
    map.insert("!D", 0b0001101);
    map.insert("!A", 0b0110001);
    map.insert("-D", 0b0001111);
    map.insert("-A", 0b0110011);
    map.insert("D+1", 0b0011111);
    map.insert("A+1", 0b0110111);
    map.insert("D-1", 0b0001110);
    map.insert("A-1", 0b0110010);
    map.insert("D+A", 0b0000010);
    map.insert("D-A", 0b0010011);
    map.insert("A-D", 0b0000111);
    map.insert("D&A", 0b0000000);
    map.insert("D|A", 0b0010101);

    map.insert("M", 0b1110000);
    map.insert("!M", 0b1110001);
    map.insert("-M", 0b1110011);
    map.insert("M+1", 0b1110111);
    map.insert("M-1", 0b1110010);
    map.insert("D+M", 0b1000010);
    map.insert("D-M", 0b1010011);
    map.insert("M-D", 0b1000111);
    map.insert("D&M", 0b1000000);
    map.insert("D|M", 0b1010101);
    map
});

/// The 7-bit compute field of a compute instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp(u8);

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match COMP_BIN.get_by_left(s.to_ascii_uppercase().as_str()) {
            Some(bin) => Ok(Comp(*bin)),
            None => Err(format!("Unknown compute: `{s}`")),
        }
    }

    pub fn from_bin(bin: u8) -> Option<Self> {
        let bin = bin & 0x7F;
        COMP_BIN.contains_right(&bin).then_some(Comp(bin))
    }

    pub fn bin(self) -> u8 {
        self.0
    }

    pub fn mnemonic(self) -> &'static str {
        COMP_BIN.get_by_right(&self.0).copied().unwrap_or("?")
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(COMP_BIN.len(), 28);
    }

    #[test]
    fn parse() {
        assert_eq!(Comp::parse("D+1").map(Comp::bin), Ok(0b0011111));
        assert_eq!(Comp::parse("m-1").map(Comp::bin), Ok(0b1110010));
        assert_eq!(Comp::parse("D|M").map(Comp::bin), Ok(0b1010101));
        assert!(Comp::parse("D+2").is_err());
        assert!(Comp::parse("").is_err());
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(Comp::from_bin(0b0101010).map(Comp::mnemonic), Some("0"));
        assert_eq!(Comp::from_bin(0b1000111).map(|c| c.to_string()), Some("M-D".to_string()));
        assert_eq!(Comp::from_bin(0b1111111), None);
    }
}
