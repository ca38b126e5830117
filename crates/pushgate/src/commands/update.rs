use pushgate_core::RefChange;

use super::{Context, UpdateArgs, validate};
use crate::error::Result;

pub(crate) fn run(context: &Context, args: UpdateArgs) -> Result<()> {
    let ref_change = RefChange::new(args.ref_name, args.old, args.new)?;
    validate::run(context, &[ref_change])
}
