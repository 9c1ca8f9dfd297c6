//! 文档解码
//!
//! Word 文本提取与 PDF 字节流文本抢救。两者都只产出纯文本，
//! 识别题目仍由文本提取器完成

use crate::error::ParseError;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// PDF 抢救文本的最小可用长度（字符数）
const MIN_PDF_TEXT_LEN: usize = 50;

/// 从 DOCX 字节流提取纯文本
///
/// DOCX 本质上是 ZIP，正文位于 word/document.xml；
/// 文本都在 w:t 节点内，段落结束补换行，w:br/w:tab 对应换行和制表符
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ParseError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ParseError::Word(e.to_string()))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ParseError::Word(e.to_string()))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ParseError::Word(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_text = true,
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"br" => text.push('\n'),
                b"tab" => text.push('\t'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let chunk = t.unescape().map_err(|e| ParseError::Word(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Word(e.to_string())),
            Ok(_) => {}
        }
    }

    Ok(text)
}

/// 从 PDF 字节流尽力抢救文本
///
/// 不做真正的版面解析，只按顺序清理字节流里的 PDF 结构垃圾：
/// stream 区块、字典、名字对象、控制字符，最后压缩空白。
/// 清理后不足 [`MIN_PDF_TEXT_LEN`] 个字符视为抢救失败（硬失败）
pub fn salvage_pdf_text(bytes: &[u8]) -> Result<String, ParseError> {
    let raw = String::from_utf8_lossy(bytes).into_owned();

    let mut text = Regex::new(r"(?s)stream.*?endstream")?
        .replace_all(&raw, "")
        .into_owned();
    text = Regex::new(r"(?s)<<.*?>>")?.replace_all(&text, "").into_owned();
    text = Regex::new(r"/[A-Za-z]+")?.replace_all(&text, " ").into_owned();
    text = Regex::new(r"[\x00-\x1F\x7F-\xFF]")?
        .replace_all(&text, " ")
        .into_owned();
    text = Regex::new(r"\s+")?.replace_all(&text, " ").into_owned();

    if text.chars().count() < MIN_PDF_TEXT_LEN {
        return Err(ParseError::PdfTextTooShort);
    }

    Ok(text)
}
