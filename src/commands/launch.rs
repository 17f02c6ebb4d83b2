use crate::commands::list::load_catalog_cache;
use crate::core::{
    config::Settings,
    error::{ReplayNavigatorError, Result},
    launch::LaunchStrategy,
    output::{print_info, print_success},
};
use clap::Args;

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Catalog index of the replay to launch (as shown by 'list')
    pub index: Option<usize>,
}

pub fn execute_launch(args: &LaunchArgs) -> Result<()> {
    let index = match args.index {
        Some(index) => index,
        None => {
            print_info("No replay selected.");
            return Ok(());
        }
    };

    if index == 0 {
        return Err(ReplayNavigatorError::ZeroIndex);
    }

    let settings = Settings::load_or_create()?;
    let replays_dir = settings.require_replays_dir()?;

    let records = load_catalog_cache(replays_dir)?;
    let record = records
        .get(index - 1)
        .ok_or_else(|| ReplayNavigatorError::index_out_of_range(index, records.len()))?;

    // The catalog may be stale; never hand the game a path that is gone.
    if !record.path.exists() {
        return Err(ReplayNavigatorError::file_not_found(&record.path));
    }

    let strategy = LaunchStrategy::for_host(&settings)?;
    strategy.launch(&record.path)?;

    print_success(&format!("Launching replay: {}", record.path.display()));
    Ok(())
}
