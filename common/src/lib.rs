//! Roma Tours Common Library
//!
//! CLIとWeb(WASM)で共有されるカタログ・検索フィルタ・詳細モーダルのロジック

pub mod types;
pub mod error;
pub mod catalog;
pub mod view;
pub mod debounce;
pub mod filter;
pub mod detail;
pub mod page;
pub mod carousel;
pub mod theme;
pub mod contact;
pub mod nav;

pub use types::{Category, Comment, LocationDetail, LocationRecord, LocationSummary};
pub use error::{Error, Result};
pub use catalog::Catalog;
pub use view::{RecordingView, View, ViewCall};
pub use debounce::{Debouncer, TimerHandle, DEFAULT_DEBOUNCE_MS};
pub use filter::{compute_visibility, count_message, CategoryFilter, FilterEngine, FilterState, Visibility};
pub use detail::{DetailPresenter, ModalState, RenderPayload};
pub use page::{InputEvent, LandingPage, Outcome};
pub use carousel::{Carousel, AUTO_ADVANCE_MS};
pub use theme::{Theme, THEME_STORAGE_KEY};
pub use contact::{
    ContactForm, ContactSubmission, Notification, NotificationKind, NOTIFICATION_DISMISS_MS,
    SENDING_LABEL,
};
pub use nav::NavTarget;
