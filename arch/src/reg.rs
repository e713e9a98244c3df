use num_enum::{FromPrimitive, IntoPrimitive};
use once_cell::sync::Lazy;
use strum::{Display, EnumString};

/// The 3-bit destination field of a compute instruction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    Null,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().parse::<Self>() {
            Ok(dest) => Ok(dest),
            Err(_) => Err(format!("Unknown destination: `{s}`")),
        }
    }
}

pub const SCREEN: u16 = 16384;
pub const KEYBOARD: u16 = 24576;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Predefined symbols: general purpose registers R0..R15 and the memory mapped I/O bases.
pub static BUILTINS: Lazy<Vec<(String, u16)>> = Lazy::new(|| {
    (0..16)
        .map(|r| (format!("R{r}"), r))
        .chain([
            ("SCREEN".to_string(), SCREEN),
            ("KEYBOARD".to_string(), KEYBOARD),
        ])
        .collect()
});

#[test]
fn test() {
    assert_eq!(Dest::parse(""), Ok(Dest::Null));
    assert_eq!(Dest::parse("AMD"), Ok(Dest::AMD));
    assert_eq!(Dest::parse("md"), Ok(Dest::MD));
    assert!(Dest::parse("DM").is_err());
    assert_eq!(u8::from(Dest::D), 0b010);
    assert_eq!(u8::from(Dest::AM), 0b101);
    assert_eq!(Dest::from(0b001), Dest::M);

    assert_eq!(BUILTINS.len(), 18);
    assert_eq!(BUILTINS[15], ("R15".to_string(), 15));
    assert!(BUILTINS.contains(&("KEYBOARD".to_string(), 24576)));
}
