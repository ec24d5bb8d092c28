// 命令行工具 - 将文本规范化为语音合成可朗读的西里尔文
use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use speech_normalizer::{NormalizationResult, NormalizerConfig, SpeechNormalizer};

#[derive(Parser, Debug)]
#[command(name = "speech-normalize")]
#[command(
    about = "将拉丁字母和数字改写为语音合成可朗读的西里尔文",
    long_about = "未给出文本时逐行读取标准输入；非 UTF-8 的行会记录警告并输出空行"
)]
#[command(version)]
struct CliArgs {
    /// 输出完整的 JSON 规范化结果
    #[arg(long)]
    json: bool,

    /// 配置文件路径（默认读取用户配置目录）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 待规范化的文本，多个参数以空格连接
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

fn emit(out: &mut impl Write, result: &NormalizationResult, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    } else {
        writeln!(out, "{}", result.text)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，保持 stdout 干净）
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = CliArgs::parse();
    let config = NormalizerConfig::load_or_default(args.config.as_deref())?;
    let engine = SpeechNormalizer::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        if let Some(result) = engine.prepare_utterance(&text) {
            emit(&mut out, &result, args.json)?;
        }
        return Ok(());
    }

    normalize_lines(&engine, std::io::stdin().lock(), &mut out, args.json)
}

/// 逐行规范化
///
/// 空行与非 UTF-8 行输出空行，保持与输入行对齐
fn normalize_lines(
    engine: &SpeechNormalizer,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    for (line_no, raw) in input.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("第 {} 行不是有效的 UTF-8，已跳过: {}", line_no + 1, e);
                writeln!(out)?;
                continue;
            }
        };

        match engine.prepare_utterance(&line) {
            Some(result) => emit(out, &result, json)?,
            None => writeln!(out)?,
        }
    }

    Ok(())
}
