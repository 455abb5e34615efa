mod pull_request_response;

pub use pull_request_response::BaseRef;
pub use pull_request_response::PullRequest;
pub use pull_request_response::PullRequestState;
