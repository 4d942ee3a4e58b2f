//! 対話セッション（browseコマンド）
//!
//! 標準入力の1行を1イベントとして扱う。文字入力はデバウンスされ、
//! 入力が300ms止まった時点で再計算する。
//!
//! - テキスト        → 検索語の入力
//! - 空行            → 即時検索（Enter）
//! - `:cat <値>`     → カテゴリ選択
//! - `:open <キー>`  → 詳細を開く
//! - `:close`        → 閉じる
//! - `:esc`          → Escapeキー
//! - `:help` / `:quit`

use crate::error::Result;
use roma_tours_common::{Error as CommonError, InputEvent, LandingPage, View};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{sleep_until, Instant};

pub const HELP: &str = "\
  テキスト       検索語を入力（300ms後に絞り込み）
  (空行)         すぐに検索
  :cat <値>      カテゴリ (all/ancient/religious/modern)
  :open <キー>   詳細を表示
  :close         詳細を閉じる
  :esc           Escapeキー
  :quit          終了";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(InputEvent),
    Help,
    Quit,
    Unknown(String),
}

/// 1行をコマンドに変換
pub fn parse_line(line: &str) -> SessionCommand {
    let Some(rest) = line.strip_prefix(':') else {
        if line.trim().is_empty() {
            return SessionCommand::Event(InputEvent::SearchTriggered);
        }
        return SessionCommand::Event(InputEvent::QueryChanged(line.to_string()));
    };

    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).unwrap_or("");

    match (command, arg) {
        ("cat" | "category", value) if !value.is_empty() => {
            SessionCommand::Event(InputEvent::CategorySelected(value.to_string()))
        }
        ("open", key) if !key.is_empty() => SessionCommand::Event(InputEvent::OpenDetail(key.to_string())),
        ("close", _) => SessionCommand::Event(InputEvent::CloseDetail),
        ("esc", _) => SessionCommand::Event(InputEvent::EscapePressed),
        ("help" | "h", _) => SessionCommand::Help,
        ("quit" | "q", _) => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.to_string()),
    }
}

/// セッションを実行。入力が尽きたら保留中の検索を待ってから終了
pub async fn run<R>(page: &mut LandingPage, input: R, view: &mut dyn View) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;
    let mut lines = input.lines();

    page.start(view);

    loop {
        let deadline = page.pending_deadline();
        let wake_at = start + Duration::from_millis(deadline.unwrap_or(0));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    SessionCommand::Event(event) => dispatch(page, event, now_ms(), view)?,
                    SessionCommand::Help => println!("{}", HELP),
                    SessionCommand::Quit => return Ok(()),
                    SessionCommand::Unknown(cmd) => println!("不明なコマンド: {} (:help で一覧)", cmd),
                }
            }
            _ = sleep_until(wake_at), if deadline.is_some() => {
                page.tick(now_ms(), view);
            }
        }
    }

    if let Some(deadline) = page.pending_deadline() {
        sleep_until(start + Duration::from_millis(deadline)).await;
        page.tick(now_ms(), view);
    }
    Ok(())
}

/// 存在しないキーや不明カテゴリはセッションを止めずに知らせる
fn dispatch(page: &mut LandingPage, event: InputEvent, now_ms: u64, view: &mut dyn View) -> Result<()> {
    match page.handle(event, now_ms, view) {
        Ok(_) => {
            if page.filter_state().category.is_unknown() {
                println!("⚠ 不明なカテゴリです: {}", page.filter_state().category);
            }
            Ok(())
        }
        Err(CommonError::LocationNotFound(key)) => {
            println!("⚠ 観光地が見つかりません: {}", key);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("Fountain"),
            SessionCommand::Event(InputEvent::QueryChanged("Fountain".into()))
        );
        assert_eq!(parse_line(""), SessionCommand::Event(InputEvent::SearchTriggered));
        assert_eq!(
            parse_line(":cat religious"),
            SessionCommand::Event(InputEvent::CategorySelected("religious".into()))
        );
        assert_eq!(
            parse_line(":open  pantheon "),
            SessionCommand::Event(InputEvent::OpenDetail("pantheon".into()))
        );
        assert_eq!(parse_line(":close"), SessionCommand::Event(InputEvent::CloseDetail));
        assert_eq!(parse_line(":esc"), SessionCommand::Event(InputEvent::EscapePressed));
        assert_eq!(parse_line(":q"), SessionCommand::Quit);
        assert_eq!(parse_line(":open"), SessionCommand::Unknown(":open".into()));
        assert_eq!(parse_line(":dance"), SessionCommand::Unknown(":dance".into()));
    }
}
