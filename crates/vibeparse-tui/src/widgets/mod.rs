//! Custom widget components

mod audio_bar;
pub mod code_block;
mod dropdown;
mod generation_form;
mod header;
pub mod modal_overlay;
mod notice;
mod progress;
pub mod scene_player;
pub mod status_bar;
mod toc_overlay;

pub use audio_bar::AudioBar;
pub use code_block::CodeBlock;
pub use dropdown::DropdownView;
pub use generation_form::{GenerationFormView, TextInputView};
pub use header::MainHeader;
pub use notice::NoticeView;
pub use progress::SceneProgress;
pub use scene_player::ScenePlayer;
pub use status_bar::StatusBar;
pub use toc_overlay::TocOverlayView;
