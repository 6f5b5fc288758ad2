use prettytable::{row, Table};
use showcase_core::types::Project;

pub fn pretty_print_projects(projects: &[&Project]) {
    build_table(projects).printstd();
}

fn build_table(projects: &[&Project]) -> Table {
    let mut table = Table::new();

    table.add_row(row![bF=>
        "ID",
        "Project",
        "Sector",
        "Services",
        "Year",
        "KPIs",
    ]);

    for project in projects {
        let project_info = format!("{}\nfor: {}", project.title, project.brand);

        let services = project
            .services
            .iter()
            .map(|service| service.label())
            .collect::<Vec<_>>()
            .join(", ");

        // Cards only show the first three metrics
        let kpis = project
            .kpi
            .iter()
            .take(3)
            .map(|kpi| format!("{}: {}", kpi.label, kpi.value))
            .collect::<Vec<_>>()
            .join("\n");

        let year = if project.has_video() {
            format!("{} ▶", project.year)
        } else {
            project.year.to_string()
        };

        table.add_row(row![
            project.id,
            project_info,
            project.sector,
            services,
            year,
            kpis,
        ]);
    }

    table
}
