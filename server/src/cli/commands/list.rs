use crate::cli::ListArgs;
use crate::table;
use crate::CliError;
use ::tracing::info;
use showcase_core::types::CriteriaParams;
use showcase_core::{derive_visible_projects, Catalog};

pub fn handle_list(catalog: &Catalog, args: ListArgs) -> Result<(), CliError> {
    let criteria = CriteriaParams {
        q: Some(args.query),
        sectors: args.sectors,
        services: args.services,
        year: Some(args.year),
        sort: Some(args.sort),
    }
    .into_criteria()?;

    let projects = derive_visible_projects(catalog.projects(), &criteria);
    info!(
        "Showing {} of {} projects\n",
        projects.len(),
        catalog.len()
    );

    if projects.is_empty() {
        println!("No projects match these filters.");
        return Ok(());
    }

    table::pretty_print_projects(&projects);
    Ok(())
}
