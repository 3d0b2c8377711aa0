pub use crate::blog_post::{BlogPost as BlogPostEntity, BlogPostChanges, NewBlogPost};
pub use crate::case_study::{CaseStudy as CaseStudyEntity, CaseStudyChanges, NewCaseStudy};
pub use crate::contact_submission::{
    ContactSubmission as ContactSubmissionEntity, ContactSubmissionChanges, NewContactSubmission,
};
