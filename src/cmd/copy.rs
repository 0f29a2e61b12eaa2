use crate::context::AppContext;
use crate::workflow::copy_diff::{self, CopyOutcome};

pub async fn run(ctx: &AppContext) -> CopyOutcome {
    copy_diff::copy_today_diff(ctx).await
}
