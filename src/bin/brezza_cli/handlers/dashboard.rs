#![deny(clippy::all, clippy::pedantic)]

use crate::args::DashboardCmd;
use crate::ctx::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: DashboardCmd) -> Result<(), CliError> {
    match cmd {
        DashboardCmd::Stats => {
            let stats = ctx.client.dashboard_stats().await?;
            print_json(&stats)
        }
    }
}
