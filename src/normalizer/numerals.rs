//! 俄语数词展开
//!
//! 将每个最大的 `[0-9]+` 片段读作俄语数词，量级名词按数值做单数/少数/多数一致

use crate::normalizer::tokenizer::{TokenType, Tokenizer};
use crate::normalizer::types::{Replacement, ReplacementReason};

/// 逐位读数用词
const DIGIT_WORDS: [&str; 10] = [
    "ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const ONES: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

/// 阴性个位（仅用于千位组）
const ONES_FEMININE: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// 量级名词的三种形式：单数 / 少数（2-4）/ 多数
type NounForms = [&'static str; 3];

/// 量级组
struct MagnitudeGroup {
    forms: Option<NounForms>,
    feminine: bool,
}

/// 按组位置排列：个、千、百万、十亿、万亿
const GROUPS: [MagnitudeGroup; 5] = [
    MagnitudeGroup {
        forms: None,
        feminine: false,
    },
    MagnitudeGroup {
        forms: Some(["тысяча", "тысячи", "тысяч"]),
        feminine: true,
    },
    MagnitudeGroup {
        forms: Some(["миллион", "миллиона", "миллионов"]),
        feminine: false,
    },
    MagnitudeGroup {
        forms: Some(["миллиард", "миллиарда", "миллиардов"]),
        feminine: false,
    },
    MagnitudeGroup {
        forms: Some(["триллион", "триллиона", "триллионов"]),
        feminine: false,
    },
];

/// 能按数值读出的最大位数（5 组 × 3 位）
const MAX_GROUPED_DIGITS: usize = GROUPS.len() * 3;

/// 数词展开器（无状态，可跨线程共享）
#[derive(Debug, Default, Clone, Copy)]
pub struct NumeralExpander;

impl NumeralExpander {
    pub fn new() -> Self {
        Self
    }

    /// 展开文本中的数字
    ///
    /// 纯函数，不可失败
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_with_replacements(text).0
    }

    /// 展开文本中的数字并返回每个被改写片段的记录
    pub fn normalize_with_replacements(&self, text: &str) -> (String, Vec<Replacement>) {
        let mut result = String::with_capacity(text.len() * 4);
        let mut replacements = Vec::new();

        for token in Tokenizer::tokenize(text) {
            if token.token_type != TokenType::Digits {
                result.push_str(token.text);
                continue;
            }

            let (replaced, reason) = self.number_to_words(token.text);
            result.push_str(&replaced);
            if replaced != token.text {
                replacements.push(Replacement {
                    original: token.text.to_string(),
                    replaced,
                    start: token.start,
                    end: token.end,
                    reason,
                });
            }
        }

        (result, replacements)
    }

    /// 将单个数字片段转为数词
    ///
    /// 前导零或超出万亿量级时逐位读出；无法解析时原样返回
    fn number_to_words(&self, number: &str) -> (String, ReplacementReason) {
        // 无前导零时，位数超过 15 等价于分组数超过 5
        let leading_zero = number.len() > 1 && number.starts_with('0');
        if leading_zero || number.len() > MAX_GROUPED_DIGITS {
            return (spell_digits(number), ReplacementReason::DigitSpelling);
        }

        let value: u64 = match number.parse() {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("数字片段解析失败，保留原文: {:?} ({})", number, e);
                return (number.to_string(), ReplacementReason::NumberWords);
            }
        };

        if value == 0 {
            return (DIGIT_WORDS[0].to_string(), ReplacementReason::NumberWords);
        }

        let mut groups: Vec<u64> = Vec::with_capacity(GROUPS.len());
        let mut rest = value;
        while rest > 0 {
            groups.push(rest % 1000);
            rest /= 1000;
        }

        let mut words: Vec<&'static str> = Vec::new();
        for (idx, &group_value) in groups.iter().enumerate().rev() {
            if group_value == 0 {
                continue;
            }
            let group = &GROUPS[idx];
            triplet_to_words(group_value, group.feminine, &mut words);
            if let Some(forms) = &group.forms {
                words.push(plural_form(group_value, forms));
            }
        }

        (words.join(" "), ReplacementReason::NumberWords)
    }
}

/// 逐位读出，空格连接
fn spell_digits(number: &str) -> String {
    number
        .bytes()
        .map(|b| DIGIT_WORDS[(b - b'0') as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// 选择量级名词形式
///
/// 11-19 结尾必须先判断，否则会落入个位规则
fn plural_form(value: u64, forms: &NounForms) -> &'static str {
    let value = value % 100;
    if (11..=19).contains(&value) {
        return forms[2];
    }
    match value % 10 {
        1 => forms[0],
        2..=4 => forms[1],
        _ => forms[2],
    }
}

/// 读出 0-999 的一组
fn triplet_to_words(value: u64, feminine: bool, words: &mut Vec<&'static str>) {
    let hundreds = (value / 100) as usize;
    let tens = ((value / 10) % 10) as usize;
    let ones = (value % 10) as usize;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    if tens == 1 {
        words.push(TEENS[ones]);
        return;
    }
    if tens > 0 {
        words.push(TENS[tens]);
    }
    if ones > 0 {
        let table = if feminine { &ONES_FEMININE } else { &ONES };
        words.push(table[ones]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> String {
        NumeralExpander::new().normalize(text)
    }

    #[test]
    fn test_zero_and_small_numbers() {
        assert_eq!(expand("0"), "ноль");
        assert_eq!(expand("7"), "семь");
        assert_eq!(expand("15"), "пятнадцать");
        assert_eq!(expand("10"), "десять");
        assert_eq!(expand("21"), "двадцать один");
        assert_eq!(expand("40"), "сорок");
        assert_eq!(expand("100"), "сто");
        assert_eq!(expand("119"), "сто девятнадцать");
        assert_eq!(expand("999"), "девятьсот девяносто девять");
    }

    #[test]
    fn test_thousands_are_feminine() {
        assert_eq!(expand("1000"), "одна тысяча");
        assert_eq!(expand("2000"), "две тысячи");
        assert_eq!(expand("5000"), "пять тысяч");
        assert_eq!(expand("11000"), "одиннадцать тысяч");
        assert_eq!(expand("21000"), "двадцать одна тысяча");
        assert_eq!(expand("1001"), "одна тысяча один");
        assert_eq!(expand("2024"), "две тысячи двадцать четыре");
    }

    #[test]
    fn test_larger_magnitudes_are_masculine() {
        assert_eq!(expand("1000000"), "один миллион");
        assert_eq!(expand("2000000"), "два миллиона");
        assert_eq!(expand("12000000"), "двенадцать миллионов");
        assert_eq!(expand("1000000000"), "один миллиард");
        assert_eq!(expand("3000000000000"), "три триллиона");
        assert_eq!(expand("1002003"), "один миллион две тысячи три");
        assert_eq!(
            expand("999999999999999"),
            "девятьсот девяносто девять триллионов девятьсот девяносто девять миллиардов \
             девятьсот девяносто девять миллионов девятьсот девяносто девять тысяч \
             девятьсот девяносто девять"
        );
    }

    #[test]
    fn test_plural_form_teen_exception() {
        let forms = ["тысяча", "тысячи", "тысяч"];
        assert_eq!(plural_form(1, &forms), "тысяча");
        assert_eq!(plural_form(3, &forms), "тысячи");
        assert_eq!(plural_form(11, &forms), "тысяч");
        assert_eq!(plural_form(14, &forms), "тысяч");
        assert_eq!(plural_form(111, &forms), "тысяч");
        assert_eq!(plural_form(101, &forms), "тысяча");
        assert_eq!(plural_form(122, &forms), "тысячи");
        assert_eq!(plural_form(20, &forms), "тысяч");
    }

    #[test]
    fn test_leading_zero_spelled_digit_by_digit() {
        assert_eq!(expand("007"), "ноль ноль семь");
        assert_eq!(expand("00"), "ноль ноль");
        assert_eq!(expand("0123"), "ноль один два три");
        for run in ["01", "000", "0987654321"] {
            let words: Vec<_> = expand(run).split(' ').map(str::to_string).collect();
            assert_eq!(words.len(), run.len());
            for (word, digit) in words.iter().zip(run.bytes()) {
                assert_eq!(word, DIGIT_WORDS[(digit - b'0') as usize]);
            }
        }
    }

    #[test]
    fn test_overflow_falls_back_to_digits() {
        // 16 位：6 组，超出万亿
        assert_eq!(expand("1000000000000000"), spell_digits("1000000000000000"));
        // 超出 u64 范围同样逐位读出
        let long = "123456789012345678901234567890";
        assert_eq!(expand(long), spell_digits(long));
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(
            expand("Код 007, квартира 21."),
            "Код ноль ноль семь, квартира двадцать один."
        );
        assert_eq!(expand(""), "");
        assert_eq!(expand("без цифр"), "без цифр");
    }

    #[test]
    fn test_no_ascii_digits_and_idempotent() {
        for input in ["1 22 333 4444 55555", "0 00 000", "12:30, 31.12.2024"] {
            let once = expand(input);
            assert!(!once.chars().any(|c| c.is_ascii_digit()), "{once:?}");
            assert_eq!(expand(&once), once);
        }
    }

    #[test]
    fn test_replacement_reasons() {
        let (text, applied) = NumeralExpander::new().normalize_with_replacements("05 и 5");
        assert_eq!(text, "ноль пять и пять");
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].reason, ReplacementReason::DigitSpelling);
        assert_eq!(applied[1].reason, ReplacementReason::NumberWords);
        assert_eq!((applied[1].start, applied[1].end), (6, 7));
    }
}
