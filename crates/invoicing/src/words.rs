//! Amount in words, Indian numbering scale.
//!
//! Groups are crore (10^7), lakh (10^5), thousand (10^3) and the trailing
//! 0–999 group. Each non-zero group is spelled with the same three-digit
//! converter and followed by its scale word.

const BELOW_TWENTY: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        return BELOW_TWENTY[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        units => format!("{tens} {}", BELOW_TWENTY[units as usize]),
    }
}

fn three_digits(n: u64) -> String {
    debug_assert!(n < 1000);
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if n / 100 > 0 {
        parts.push(format!("{} Hundred", BELOW_TWENTY[(n / 100) as usize]));
    }
    if n % 100 > 0 {
        parts.push(two_digits(n % 100));
    }
    parts.join(" ")
}

/// Spell out a non-negative integer amount.
///
/// ```
/// use invoicegen_invoicing::amount_in_words;
///
/// assert_eq!(
///     amount_in_words(1_234_567),
///     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
/// );
/// ```
///
/// A crore group above 999 is itself spelled on the Indian scale, so
/// `10^10` reads "One Thousand Crore".
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }

    let crore = amount / CRORE;
    let lakh = (amount % CRORE) / LAKH;
    let thousand = (amount % LAKH) / THOUSAND;
    let hundred = amount % THOUSAND;

    let mut parts: Vec<String> = Vec::with_capacity(4);
    if crore > 0 {
        let words = if crore < 1000 { three_digits(crore) } else { amount_in_words(crore) };
        parts.push(format!("{words} Crore"));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", three_digits(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", three_digits(thousand)));
    }
    if hundred > 0 {
        parts.push(three_digits(hundred));
    }

    parts.join(" ").trim().to_string()
}

/// Rupee amount for the invoice "In Words" row.
///
/// Paise are dropped: the integral part of `total` is spelled, followed by
/// "Rupees Only". Negative and non-finite totals read as zero.
pub fn rupees_in_words(total: f64) -> String {
    let rupees = if total.is_finite() && total > 0.0 {
        total.trunc() as u64
    } else {
        0
    };
    format!("{} Rupees Only", amount_in_words(rupees))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Parse words produced by `amount_in_words` back into a number.
    /// Only covers amounts below 10^9 (crore group under 100).
    fn words_to_amount(words: &str) -> u64 {
        if words == "Zero" {
            return 0;
        }
        let mut total = 0u64;
        let mut group = 0u64;
        for token in words.split(' ') {
            if let Some(i) = BELOW_TWENTY.iter().position(|w| *w == token) {
                group += i as u64;
            } else if let Some(i) = TENS.iter().position(|w| *w == token) {
                group += 10 * i as u64;
            } else {
                match token {
                    "Hundred" => group *= 100,
                    "Thousand" => {
                        total += group * THOUSAND;
                        group = 0;
                    }
                    "Lakh" => {
                        total += group * LAKH;
                        group = 0;
                    }
                    "Crore" => {
                        total += group * CRORE;
                        group = 0;
                    }
                    other => panic!("unexpected token {other:?} in {words:?}"),
                }
            }
        }
        total + group
    }

    #[test]
    fn zero() {
        assert_eq!(amount_in_words(0), "Zero");
    }

    #[test]
    fn teens_and_tens() {
        assert_eq!(amount_in_words(7), "Seven");
        assert_eq!(amount_in_words(19), "Nineteen");
        assert_eq!(amount_in_words(20), "Twenty");
        assert_eq!(amount_in_words(21), "Twenty One");
        assert_eq!(amount_in_words(90), "Ninety");
        assert_eq!(amount_in_words(99), "Ninety Nine");
    }

    #[test]
    fn hundreds() {
        assert_eq!(amount_in_words(100), "One Hundred");
        assert_eq!(amount_in_words(105), "One Hundred Five");
        assert_eq!(amount_in_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn scale_words() {
        assert_eq!(amount_in_words(1_000), "One Thousand");
        assert_eq!(amount_in_words(100_000), "One Lakh");
        assert_eq!(amount_in_words(10_000_000), "One Crore");
        assert_eq!(amount_in_words(100_001), "One Lakh One");
        assert_eq!(
            amount_in_words(1_234_567),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
        assert_eq!(
            amount_in_words(999_999_999),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
    }

    #[test]
    fn large_crore_groups() {
        assert_eq!(amount_in_words(1_000 * CRORE), "One Thousand Crore");
        assert_eq!(amount_in_words(150 * CRORE), "One Hundred Fifty Crore");
        assert_eq!(amount_in_words(12 * LAKH * CRORE), "Twelve Lakh Crore");
    }

    #[test]
    fn rupees_line() {
        assert_eq!(rupees_in_words(200.0), "Two Hundred Rupees Only");
        assert_eq!(rupees_in_words(1_499.99), "One Thousand Four Hundred Ninety Nine Rupees Only");
        assert_eq!(rupees_in_words(0.75), "Zero Rupees Only");
        assert_eq!(rupees_in_words(-10.0), "Zero Rupees Only");
        assert_eq!(rupees_in_words(f64::NAN), "Zero Rupees Only");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: spelling is deterministic and reads back to the same amount.
        #[test]
        fn words_read_back(n in 0u64..1_000_000_000) {
            let words = amount_in_words(n);
            prop_assert_eq!(&words, &amount_in_words(n));
            prop_assert_eq!(words_to_amount(&words), n);
        }

        /// Property: a zero group never contributes its scale word, and the
        /// output carries no stray whitespace.
        #[test]
        fn zero_groups_are_silent(n in 0u64..1_000_000_000) {
            let words = amount_in_words(n);
            let tokens: Vec<&str> = words.split(' ').collect();

            prop_assert_eq!(words.trim(), words.as_str());
            prop_assert!(!tokens.contains(&""), "double space in {:?}", words);

            if n / CRORE == 0 {
                prop_assert!(!tokens.contains(&"Crore"));
            }
            if (n % CRORE) / LAKH == 0 {
                prop_assert!(!tokens.contains(&"Lakh"));
            }
            if (n % LAKH) / THOUSAND == 0 {
                prop_assert!(!tokens.contains(&"Thousand"));
            }
            if (n % THOUSAND) / 100 == 0 {
                prop_assert!(!tokens.contains(&"Hundred"));
            }
        }
    }
}
