pub mod blog_post;
pub mod case_study;
pub mod contact_submission;
pub mod prelude;
