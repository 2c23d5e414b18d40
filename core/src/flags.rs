//! Compact encodings of the four property attributes.
//!
//! A flag spec is either a bitmask or a letter code:
//!
//! | bit      | letter | when set      |
//! |----------|--------|---------------|
//! | `0b0001` | `w`    | writable      |
//! | `0b0010` | `e`    | enumerable    |
//! | `0b0100` | `c`    | configurable  |
//! | `0b1000` | `a`    | accessor, otherwise data |
//!
//! Decoding never fails: bits above the fourth and letters outside `weca`
//! are ignored.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::Serialize;

use crate::runtime::value::object::Property;

bitflags! {
    /// Decoded attribute bits. The accessor bit selects the descriptor kind,
    /// and `WRITABLE` is meaningless when it is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFlags: u8 {
        const WRITABLE = 0b0001;
        const ENUMERABLE = 0b0010;
        const CONFIGURABLE = 0b0100;
        const ACCESSOR = 0b1000;
    }
}

const LETTERS: [(char, PropertyFlags); 4] = [
    ('w', PropertyFlags::WRITABLE),
    ('e', PropertyFlags::ENUMERABLE),
    ('c', PropertyFlags::CONFIGURABLE),
    ('a', PropertyFlags::ACCESSOR),
];

impl PropertyFlags {
    /// Keep the low four bits of `mask`.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_truncate((mask & 0b1111) as u8)
    }

    /// Case-insensitive membership test of each of `w`, `e`, `c`, `a`.
    pub fn from_letters(code: &str) -> Self {
        let code = code.to_lowercase();
        LETTERS
            .iter()
            .filter(|(letter, _)| code.contains(*letter))
            .fold(Self::empty(), |acc, (_, flag)| acc | *flag)
    }

    /// Read the attributes of an installed property back as flags.
    pub fn of(prop: &Property) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::WRITABLE, prop.writable());
        flags.set(Self::ENUMERABLE, prop.enumerable);
        flags.set(Self::CONFIGURABLE, prop.configurable);
        flags.set(Self::ACCESSOR, prop.is_accessor());
        flags
    }

    pub fn is_writable(self) -> bool {
        self.contains(Self::WRITABLE)
    }

    pub fn is_enumerable(self) -> bool {
        self.contains(Self::ENUMERABLE)
    }

    pub fn is_configurable(self) -> bool {
        self.contains(Self::CONFIGURABLE)
    }

    pub fn is_accessor(self) -> bool {
        self.contains(Self::ACCESSOR)
    }

    pub fn mask(self) -> u8 {
        self.bits()
    }
}

/// Canonical letter code in `weca` order; the empty set renders as `-`.
impl fmt::Display for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (letter, flag) in LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Caller-facing flag input, resolved once into [`PropertyFlags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagSpec {
    Bits(u32),
    Letters(String),
}

impl FlagSpec {
    pub fn resolve(&self) -> PropertyFlags {
        match self {
            FlagSpec::Bits(mask) => PropertyFlags::from_mask(*mask),
            FlagSpec::Letters(code) => PropertyFlags::from_letters(code),
        }
    }
}

impl Default for FlagSpec {
    fn default() -> Self {
        FlagSpec::Bits(0)
    }
}

impl From<u8> for FlagSpec {
    fn from(value: u8) -> Self {
        FlagSpec::Bits(value.into())
    }
}

impl From<u32> for FlagSpec {
    fn from(value: u32) -> Self {
        FlagSpec::Bits(value)
    }
}

/// Plain integer literals land here. Negative masks keep their
/// two's-complement low bits.
impl From<i32> for FlagSpec {
    fn from(value: i32) -> Self {
        FlagSpec::Bits(value as u32)
    }
}

impl From<&str> for FlagSpec {
    fn from(value: &str) -> Self {
        FlagSpec::Letters(value.to_string())
    }
}

impl From<String> for FlagSpec {
    fn from(value: String) -> Self {
        FlagSpec::Letters(value)
    }
}

impl From<PropertyFlags> for FlagSpec {
    fn from(value: PropertyFlags) -> Self {
        FlagSpec::Bits(value.bits().into())
    }
}

/// Numerals (decimal, `0b`, `0o`, `0x`) parse as bits, everything else as
/// letters.
impl FromStr for FlagSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let parsed = if let Some(digits) = lower.strip_prefix("0b") {
            u32::from_str_radix(digits, 2).ok()
        } else if let Some(digits) = lower.strip_prefix("0o") {
            u32::from_str_radix(digits, 8).ok()
        } else if let Some(digits) = lower.strip_prefix("0x") {
            u32::from_str_radix(digits, 16).ok()
        } else {
            lower.parse::<u32>().ok()
        };
        Ok(match parsed {
            Some(mask) => FlagSpec::Bits(mask),
            None => FlagSpec::Letters(trimmed.to_string()),
        })
    }
}

/// A flattened, serializable view of decoded flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFlags {
    pub code: String,
    pub mask: u8,
    pub kind: &'static str,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl From<PropertyFlags> for DecodedFlags {
    fn from(flags: PropertyFlags) -> Self {
        Self {
            code: flags.to_string(),
            mask: flags.mask(),
            kind: if flags.is_accessor() { "accessor" } else { "data" },
            writable: !flags.is_accessor() && flags.is_writable(),
            enumerable: flags.is_enumerable(),
            configurable: flags.is_configurable(),
        }
    }
}
