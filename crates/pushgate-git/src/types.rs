#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub committer_name: String,
    pub committer_email: String,
    pub parent_count: usize,
}
