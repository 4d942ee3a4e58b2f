//! ヒーローカルーセル
//!
//! 5秒ごとの自動送り、ドットクリックで送りタイマーをリセット、
//! ホバー中は一時停止、左右キーで前後移動。

/// 自動送り間隔
pub const AUTO_ADVANCE_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct Carousel {
    current: usize,
    total: usize,
    paused: bool,
    last_advance_ms: u64,
    interval_ms: u64,
}

impl Carousel {
    pub fn new(total: usize, now_ms: u64) -> Self {
        Self {
            current: 0,
            total,
            paused: false,
            last_advance_ms: now_ms,
            interval_ms: AUTO_ADVANCE_MS,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show(&mut self, index: usize) {
        if self.total > 0 {
            self.current = index % self.total;
        }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
    }

    /// ドットクリック
    pub fn select(&mut self, index: usize, now_ms: u64) {
        self.show(index);
        self.last_advance_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self, now_ms: u64) {
        self.paused = false;
        self.last_advance_ms = now_ms;
    }

    /// 自動送り。進めたらtrue
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.paused || self.total == 0 {
            return false;
        }
        if now_ms.saturating_sub(self.last_advance_ms) < self.interval_ms {
            return false;
        }
        self.next();
        self.last_advance_ms = now_ms;
        true
    }

    /// 矢印キー。処理したらtrue
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }
}
