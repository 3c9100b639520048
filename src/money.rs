use std::fmt;
use std::ops::Add;

/// An amount in rupees, held as whole paise so derived figures never drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rupees {
    paise: i64,
}

impl Rupees {
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Rounds to the nearest paisa. Out-of-range amounts saturate and NaN is zero.
    pub fn from_f64(amount: f64) -> Self {
        Self {
            paise: (amount * 100.0).round() as i64,
        }
    }

    pub fn paise(self) -> i64 {
        self.paise
    }

    pub fn as_f64(self) -> f64 {
        self.paise as f64 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.paise == 0
    }

    /// `pct` percent of this amount, rounded half away from zero and
    /// saturating at the `i64` paise range.
    pub fn percent(self, pct: u32) -> Self {
        let scaled = self.paise as i128 * pct as i128;
        let half = if scaled < 0 { -50 } else { 50 };
        let paise = ((scaled + half) / 100).clamp(i64::MIN as i128, i64::MAX as i128);
        Self {
            paise: paise as i64,
        }
    }

    /// Grouped digits with two decimals and no currency sign: `59,51,499.40`.
    pub fn grouped(self) -> String {
        let sign = if self.paise < 0 { "-" } else { "" };
        let abs = self.paise.unsigned_abs();
        format!("{sign}{}.{:02}", group_indian(abs / 100), abs % 100)
    }

    pub fn in_words(self) -> String {
        words_for(self.paise.unsigned_abs() / 100)
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees {
            paise: self.paise.saturating_add(rhs.paise),
        }
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20B9} {}", self.grouped())
    }
}

/// Format an amount as `₹ 59,51,499.40`: two decimals, the last three
/// integer digits grouped together and every two digits before that.
pub fn format_inr(amount: f64) -> String {
    Rupees::from_f64(amount).to_string()
}

/// Plain Indian grouping without currency or decimals (`23400` → `23,400`).
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `5951499.40` → `Fifty Nine Lac Fifty One Thousand Four Hundred Ninety Nine Rupees Only`.
/// Paise are dropped.
pub fn amount_in_words(amount: f64) -> String {
    words_for(amount.abs().floor() as u64)
}

fn words_for(rupees: u64) -> String {
    if rupees == 0 {
        return "Zero Rupees Only".to_string();
    }
    format!("{} Rupees Only", spell(rupees))
}

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn spell(n: u64) -> String {
    let scaled = |unit: u64, name: &str| {
        let rest = n % unit;
        let head = format!("{} {name}", spell(n / unit));
        if rest == 0 {
            head
        } else {
            format!("{head} {}", spell(rest))
        }
    };
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let (t, o) = (n / 10, n % 10);
            if o == 0 {
                TENS[t as usize].to_string()
            } else {
                format!("{} {}", TENS[t as usize], ONES[o as usize])
            }
        }
        100..=999 => scaled(100, "Hundred"),
        1_000..=99_999 => scaled(1_000, "Thousand"),
        100_000..=9_999_999 => scaled(100_000, "Lac"),
        _ => scaled(10_000_000, "Crore"),
    }
}
