use crate::CliError;
use showcase_core::Catalog;

pub fn handle_years(catalog: &Catalog) -> Result<(), CliError> {
    for year in catalog.years() {
        println!("{year}");
    }
    Ok(())
}
