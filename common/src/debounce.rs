//! デバウンス
//!
//! 入力が止まってから一定時間後に1回だけ実行する遅延タスク。
//! 時計は呼び出し側がミリ秒で渡す（ブラウザ: Date.now、CLI: tokio Instant）。
//! 新しい入力でスケジュールし直すと世代が進み、古いハンドルは無効になる。

/// 検索入力のデバウンス間隔
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// スケジュール済みタスクのハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
    deadline_ms: u64,
}

impl TimerHandle {
    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    /// nowから発火までの残り時間
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    generation: u64,
    deadline_ms: u64,
    value: T,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// 保留中のタスクを置き換えてスケジュール
    pub fn schedule(&mut self, now_ms: u64, value: T) -> TimerHandle {
        self.generation += 1;
        let deadline_ms = now_ms.saturating_add(self.delay_ms);
        self.pending = Some(Pending {
            generation: self.generation,
            deadline_ms,
            value,
        });
        TimerHandle {
            generation: self.generation,
            deadline_ms,
        }
    }

    /// 保留中のタスクを破棄。破棄したらtrue
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// 期限を過ぎていれば値を取り出す
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.deadline_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// ホスト側タイマーからの発火。最新世代のハンドルだけが有効
    pub fn fire(&mut self, handle: TimerHandle) -> Option<T> {
        match &self.pending {
            Some(p) if p.generation == handle.generation => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_quiet_period() {
        let mut d = Debouncer::default();
        d.schedule(0, "f");
        d.schedule(100, "fo");

        assert_eq!(d.poll(300), None);
        assert_eq!(d.poll(399), None);
        assert_eq!(d.poll(400), Some("fo"));
        assert_eq!(d.poll(800), None);
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::default();
        d.schedule(0, 1);
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.poll(1000), None);
    }

    #[test]
    fn test_stale_handle_ignored() {
        let mut d = Debouncer::new(300);
        let first = d.schedule(0, "a");
        let second = d.schedule(50, "ab");

        assert_eq!(d.fire(first), None);
        assert!(d.is_pending());
        assert_eq!(d.fire(second), Some("ab"));
        assert_eq!(d.fire(second), None);
    }

    #[test]
    fn test_handle_deadline() {
        let mut d = Debouncer::new(300);
        let h = d.schedule(1000, ());
        assert_eq!(h.deadline_ms(), 1300);
        assert_eq!(h.remaining_ms(1100), 200);
        assert_eq!(h.remaining_ms(2000), 0);
        assert_eq!(d.deadline(), Some(1300));
    }
}
