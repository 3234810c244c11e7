pub mod answers;
pub mod question;
pub mod report;
