//! 分词器
//!
//! 将输入文本分割为：拉丁字母串、数字串、其他字符

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// ASCII 字母序列 `[A-Za-z]+`
    Latin,
    /// ASCII 数字序列 `[0-9]+`
    Digits,
    /// 其余字符（西里尔文、空白、标点等），原样保留
    Other,
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub token_type: TokenType,
    /// 在原文中的起始字节索引
    pub start: usize,
    /// 在原文中的结束字节索引（不含）
    pub end: usize,
}

/// 分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 分词
    ///
    /// 按字符类型将文本切成连续的最大片段，拼接所有 token 即为原文
    pub fn tokenize(text: &str) -> Vec<Token<'_>> {
        let mut tokens = Vec::new();
        let mut current: Option<(TokenType, usize)> = None;

        for (idx, ch) in text.char_indices() {
            let char_type = Self::classify_char(ch);

            match current {
                Some((ct, _)) if ct == char_type => {}
                Some((ct, start)) => {
                    // 类型切换，保存当前 token
                    tokens.push(Token {
                        text: &text[start..idx],
                        token_type: ct,
                        start,
                        end: idx,
                    });
                    current = Some((char_type, idx));
                }
                None => current = Some((char_type, idx)),
            }
        }

        // 处理最后一个 token
        if let Some((ct, start)) = current {
            tokens.push(Token {
                text: &text[start..],
                token_type: ct,
                start,
                end: text.len(),
            });
        }

        tokens
    }

    /// 字符分类
    fn classify_char(ch: char) -> TokenType {
        if ch.is_ascii_alphabetic() {
            TokenType::Latin
        } else if ch.is_ascii_digit() {
            TokenType::Digits
        } else {
            TokenType::Other
        }
    }
}
