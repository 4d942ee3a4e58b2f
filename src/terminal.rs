//! 端末出力によるビュー実装
//!
//! 表示指示はまとめておき、件数メッセージが来た時点で一覧を出力する。

use roma_tours_common::{LocationSummary, RenderPayload, View};
use std::collections::HashMap;
use std::io::{self, Write};

/// サマリ1件を出力
pub fn write_summary<W: Write>(out: &mut W, summary: &LocationSummary) -> io::Result<()> {
    let tags: Vec<&str> = summary.categories.iter().map(|c| c.as_str()).collect();
    writeln!(out, "- {} [{}]", summary.title, summary.key)?;
    writeln!(out, "    {}", summary.description)?;
    writeln!(
        out,
        "    📍 {}  ({})",
        summary.address,
        if tags.is_empty() { "-".to_string() } else { tags.join(", ") }
    )
}

/// 詳細を出力
pub fn write_detail<W: Write>(out: &mut W, payload: &RenderPayload) -> io::Result<()> {
    writeln!(out, "━━ {} ━━", payload.title)?;
    writeln!(out, "{}", payload.description)?;
    writeln!(out)?;
    writeln!(out, "画像:")?;
    for (i, image) in payload.images.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, image)?;
    }
    writeln!(out, "コメント:")?;
    if payload.comments.is_empty() {
        writeln!(out, "  (なし)")?;
    }
    for comment in &payload.comments {
        writeln!(out, "  {} ({}): {}", comment.author, comment.date, comment.text)?;
    }
    Ok(())
}

pub struct TerminalView<W: Write> {
    out: W,
    titles: HashMap<String, String>,
    batch: Vec<String>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, summaries: &[LocationSummary]) -> Self {
        Self {
            out,
            titles: summaries
                .iter()
                .map(|s| (s.key.clone(), s.title.clone()))
                .collect(),
            batch: Vec::new(),
            error: None,
        }
    }

    /// 書き込みエラーがあれば返す
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn apply_visibility(&mut self, key: &str, visible: bool) {
        if visible {
            self.batch.push(key.to_string());
        }
    }

    fn set_count_message(&mut self, message: &str) {
        let keys = std::mem::take(&mut self.batch);
        let mut lines = Vec::with_capacity(keys.len());
        for key in &keys {
            let title = self.titles.get(key).map(String::as_str).unwrap_or(key.as_str());
            lines.push(format!("  • {} [{}]", title, key));
        }

        let result = (|| {
            writeln!(self.out, "🔎 {}", message)?;
            for line in &lines {
                writeln!(self.out, "{}", line)?;
            }
            self.out.flush()
        })();
        self.record(result);
    }

    fn render_detail(&mut self, payload: &RenderPayload) {
        let result = write_detail(&mut self.out, payload);
        self.record(result);
    }

    fn set_modal_open(&mut self, open: bool) {
        if !open {
            let result = writeln!(self.out, "✔ 詳細を閉じました");
            self.record(result);
        }
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        tracing::debug!(locked, "scroll lock");
    }
}
