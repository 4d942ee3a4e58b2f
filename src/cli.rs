use clap::{Parser, Subcommand};
use roma_tours_common::Theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roma-tours")]
#[command(about = "ローマ観光地カタログの検索・詳細表示ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時は設定ファイル、なければ組み込みデータ）
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 観光地を一覧表示
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// キーワードとカテゴリで絞り込み
    Search {
        /// 検索キーワード（タイトル・説明・住所）
        #[arg(default_value = "")]
        query: String,

        /// カテゴリ (all/ancient/religious/modern)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 観光地の詳細を表示
    Show {
        /// ロケーションキー（例: colosseum）
        #[arg(required = true)]
        key: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に検索・詳細表示
    Browse,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// テーマを設定 (dark/light)
        #[arg(long)]
        theme: Option<ThemeArg>,

        /// テーマを切り替え
        #[arg(long, conflicts_with = "theme")]
        toggle_theme: bool,

        /// 既定のカタログJSONファイル
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// 検索入力のデバウンス間隔（ミリ秒）
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeArg(pub Theme);

impl std::str::FromStr for ThemeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_stored(&s.to_lowercase())
            .map(ThemeArg)
            .ok_or_else(|| format!("Unknown theme: {}. Use dark or light", s))
    }
}
