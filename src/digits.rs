use serde::Serialize;
use std::fmt;

/// The ones, tens and hundreds digits of a non-negative number.
///
/// Higher digits are ignored: `Digits::of(1234)` is `2, 3, 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Digits {
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
}

impl Digits {
    pub fn of(n: u32) -> Self {
        Digits {
            hundreds: (n / 100 % 10) as u8,
            tens: (n / 10 % 10) as u8,
            ones: (n % 10) as u8,
        }
    }

    pub fn cube_sum(&self) -> u32 {
        [self.hundreds, self.tens, self.ones]
            .iter()
            .map(|&d| u32::from(d).pow(3))
            .sum()
    }
}

pub fn is_armstrong(n: u32) -> bool {
    n == Digits::of(n).cube_sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "DA")]
    Yes,
    #[serde(rename = "NE")]
    No,
}

impl Verdict {
    pub fn token(self) -> &'static str {
        match self {
            Verdict::Yes => "DA",
            Verdict::No => "NE",
        }
    }
}

impl From<bool> for Verdict {
    fn from(armstrong: bool) -> Self {
        if armstrong {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
