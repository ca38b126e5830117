use pushgate_core::{Changeset, RefChange};

use crate::Result;

pub trait ChangesetSource: Send + Sync {
    /// Commits introduced by `ref_change`, in the order they should be reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    fn new_changesets(&self, ref_change: &RefChange) -> Result<Vec<Changeset>>;
}
