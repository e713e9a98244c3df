use crate::{alu::Comp, cond::Jump, reg::Dest};

use color_print::cformat;

/// Leading bits marking a compute instruction.
const CALC_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Addr(u16),
    Calc(Dest, Comp, Jump),
}

impl Inst {
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::Addr(value) => value,
            Inst::Calc(dest, comp, jump) => {
                CALC_PREFIX
                    | (comp.bin() as u16) << 6
                    | (u8::from(dest) as u16) << 3
                    | u8::from(jump) as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::Addr(bin));
        }
        if bin & CALC_PREFIX != CALC_PREFIX {
            return None;
        }
        let comp = Comp::from_bin((bin >> 6) as u8)?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Some(Inst::Calc(dest, comp, jump))
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(value) => cformat!("<yellow>@{}</>", value),
            Inst::Calc(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    _ => cformat!("<blue>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    _ => cformat!(";<red>{}</>", jump),
                };
                format!("{}{}{}", dest, cformat!("<green>{}</>", comp), jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(dest: &str, comp: &str, jump: &str) -> Inst {
        Inst::Calc(
            Dest::parse(dest).unwrap(),
            Comp::parse(comp).unwrap(),
            Jump::parse(jump).unwrap(),
        )
    }

    #[test]
    fn encode() {
        assert_eq!(Inst::Addr(2).to_bin(), 0b0000000000000010);
        assert_eq!(calc("D", "D+1", "").to_bin(), 0b1110011111010000);
        assert_eq!(calc("M", "D", "").to_bin(), 0b1110001100001000);
        assert_eq!(calc("", "0", "JMP").to_bin(), 0b1110101010000111);
        assert_eq!(calc("AMD", "D|M", "JLE").to_bin(), 0b1111010101111110);
        assert_eq!(calc("D", "A-1", "").to_bin(), 0b1110110010010000);
    }

    #[test]
    fn decode() {
        assert_eq!(Inst::from_bin(0b0000000000010000), Some(Inst::Addr(16)));
        assert_eq!(
            Inst::from_bin(0b1111110010001000),
            Some(calc("M", "M-1", ""))
        );
        assert_eq!(Inst::from_bin(0b1110001100000010), Some(calc("", "D", "JEQ")));
        // Compute field not in the table
        assert_eq!(Inst::from_bin(0b1111111111000000), None);
        // Missing compute prefix
        assert_eq!(Inst::from_bin(0b1000101010000000), None);
    }
}
