mod exam_vm;
mod time_fmt;

pub use exam_vm::{ANSWER_ACK_DELAY, ExamVm, LockReason, TIMEOUT_ACK_DELAY};
pub use time_fmt::format_mm_ss;
