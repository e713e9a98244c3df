use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// The 3-bit jump field of a compute instruction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().parse::<Self>() {
            Ok(jump) => Ok(jump),
            Err(_) => Err(format!("Unknown jump: `{s}`")),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse(""), Ok(Jump::Null));
    assert_eq!(Jump::parse("JMP"), Ok(Jump::JMP));
    assert_eq!(Jump::parse("jle"), Ok(Jump::JLE));
    assert!(Jump::parse("JUMP").is_err());
    assert_eq!(u8::from(Jump::JEQ), 0b010);
    assert_eq!(u8::from(Jump::JMP), 0b111);
    assert_eq!(Jump::from(0b101), Jump::JNE);
}
