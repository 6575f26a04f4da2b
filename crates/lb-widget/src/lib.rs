//! Leaderboard widget: session handling and score rendering on top of the
//! local credential store.

pub mod error;
pub mod leaderboard;
pub mod logger;
pub mod page;
pub mod remote;
pub mod score_card;
pub mod session;
pub mod session_markers;
pub mod widget;

pub use error::{Result, WidgetError};
pub use leaderboard::Leaderboard;
pub use page::{MemoryScoreBoard, Navigator, Notifier, PageHost, ScoreBoard};
pub use remote::{ScoreSource, SessionEndpoint};
pub use score_card::ScoreCard;
pub use session::{LOGOUT_REJECTED_MESSAGE, LogoutOutcome, SessionFacade};
pub use session_markers::{DEVICE_CATEGORY_KEY, MemorySessionMarkers, SessionMarkers};
pub use widget::Widget;
