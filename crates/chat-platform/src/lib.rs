pub mod storage;
pub mod reply;
