//! CLI 명령어 구현 모듈.

pub mod report;
pub mod run;
pub mod show;

pub use report::format_report;
pub use run::{run_index, RunConfig};
pub use show::{show_snapshot, ShowConfig};
