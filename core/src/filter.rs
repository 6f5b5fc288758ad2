use crate::types::{FilterCriteria, Project, SortKey};
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Narrows and orders the catalog for display.
///
/// Stages run in a fixed order: text search, sector, service, year, sort.
/// The input slice is never modified and the result depends on nothing but
/// the two arguments. Sorting is stable, so catalog order breaks ties.
pub fn derive_visible_projects<'a>(
    catalog: &'a [Project],
    criteria: &FilterCriteria,
) -> Vec<&'a Project> {
    let mut data: Vec<&Project> = catalog.iter().collect();

    if !criteria.query.trim().is_empty() {
        let needle = criteria.query.to_lowercase();
        data.retain(|project| project.matches_text(&needle));
    }

    if !criteria.sectors.is_empty() {
        data.retain(|project| criteria.sectors.contains(&project.sector));
    }

    if !criteria.services.is_empty() {
        data.retain(|project| {
            project
                .services
                .iter()
                .any(|service| criteria.services.contains(service))
        });
    }

    data.retain(|project| criteria.year.admits(project.year));

    match criteria.sort {
        SortKey::Newest => data.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Oldest => data.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::BrandAscending | SortKey::BrandDescending => {
            let collator = brand_collator();
            data.sort_by(|a, b| {
                let ordering = compare_brands(collator.as_ref(), &a.brand, &b.brand);
                match criteria.sort {
                    SortKey::BrandDescending => ordering.reverse(),
                    _ => ordering,
                }
            });
        }
    }

    tracing::debug!(
        "Derived {} of {} projects for query {:?}",
        data.len(),
        catalog.len(),
        criteria.query
    );
    data
}

/// Returns a copy of `set` with `value` removed if present, added otherwise.
pub fn toggle_membership<T: Ord + Clone>(set: &BTreeSet<T>, value: T) -> BTreeSet<T> {
    let mut next = set.clone();
    if !next.remove(&value) {
        next.insert(value);
    }
    next
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties between otherwise equal brands, and lowercase sorts first.
pub fn brand_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| tracing::warn!("Brand collator unavailable, using case-insensitive order: {e}"))
        .ok()
}

/// Orders brands with `collator`, or case-insensitively when there is none.
/// Falls back to a code point comparison so distinct brands never compare equal.
pub fn compare_brands(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let primary = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{Sector, Service, YearFilter};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    fn brands(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.brand.clone()).collect()
    }

    #[test]
    fn test_same_inputs_give_same_output() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_query("web")
            .with_sort(SortKey::BrandDescending);

        let first = derive_visible_projects(catalog.projects(), &criteria);
        let second = derive_visible_projects(catalog.projects(), &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_criteria_returns_everything_newest_first() {
        let catalog = catalog();
        let visible = derive_visible_projects(catalog.projects(), &FilterCriteria::default());

        assert_eq!(visible.len(), catalog.len());
        assert_eq!(ids(&visible), vec!["p1", "p3", "p2", "p4"]);
        assert!(visible.windows(2).all(|w| w[0].year >= w[1].year));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = catalog();
        let lower =
            derive_visible_projects(catalog.projects(), &FilterCriteria::new().with_query("heal"));
        let upper =
            derive_visible_projects(catalog.projects(), &FilterCriteria::new().with_query("HEAL"));

        assert!(lower.iter().any(|p| p.brand == "Advika Physiotherapy Clinic"));
        assert!(lower.iter().any(|p| p.title == "Healing Health & Lives"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_covers_tags_joined_by_space() {
        let catalog = catalog();
        let visible = derive_visible_projects(
            catalog.projects(),
            &FilterCriteria::new().with_query("ugc retail"),
        );
        assert_eq!(ids(&visible), vec!["p1"]);
    }

    #[test]
    fn test_whitespace_query_does_not_filter() {
        let catalog = catalog();
        let visible =
            derive_visible_projects(catalog.projects(), &FilterCriteria::new().with_query("   "));
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn test_facets_combine_with_and_across_or_within() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_sectors([Sector::WebsiteDesign])
            .with_services([Service::Social]);
        let visible = derive_visible_projects(catalog.projects(), &criteria);

        assert_eq!(ids(&visible), vec!["p1"]);
        for project in &visible {
            assert_eq!(project.sector, Sector::WebsiteDesign);
            assert!(project.offers(Service::Social));
        }

        let either = FilterCriteria::new().with_services([Service::Video, Service::Web]);
        let visible = derive_visible_projects(catalog.projects(), &either);
        assert_eq!(ids(&visible), vec!["p3", "p2", "p4"]);
    }

    #[test]
    fn test_year_is_exact_match() {
        let catalog = catalog();
        let visible =
            derive_visible_projects(catalog.projects(), &FilterCriteria::new().with_year(2025));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.year == 2025));

        let none =
            derive_visible_projects(catalog.projects(), &FilterCriteria::new().with_year(1999));
        assert!(none.is_empty());

        let all = FilterCriteria::new().with_year(YearFilter::All);
        assert_eq!(derive_visible_projects(catalog.projects(), &all).len(), 4);
    }

    #[test]
    fn test_toggle_membership_is_involutive() {
        let empty: BTreeSet<Sector> = BTreeSet::new();
        let one = toggle_membership(&empty, Sector::Branding);
        assert!(one.contains(&Sector::Branding));
        assert!(empty.is_empty());
        assert_eq!(toggle_membership(&one, Sector::Branding), empty);

        let services: BTreeSet<Service> = [Service::Seo, Service::Web].into_iter().collect();
        for value in Service::ALL {
            let twice = toggle_membership(&toggle_membership(&services, value), value);
            assert_eq!(twice, services);
        }
    }

    #[test]
    fn test_brand_sorts() {
        let catalog = catalog();
        let ascending = derive_visible_projects(
            catalog.projects(),
            &FilterCriteria::new().with_sort(SortKey::BrandAscending),
        );
        assert_eq!(
            brands(&ascending),
            vec![
                "Advika Physiotherapy Clinic",
                "Divine SSarthi",
                "Healio",
                "Velora"
            ]
        );

        let descending = derive_visible_projects(
            catalog.projects(),
            &FilterCriteria::new().with_sort(SortKey::BrandDescending),
        );
        assert_eq!(
            brands(&descending),
            vec![
                "Velora",
                "Healio",
                "Divine SSarthi",
                "Advika Physiotherapy Clinic"
            ]
        );
    }

    #[test]
    fn test_oldest_keeps_catalog_order_on_ties() {
        let catalog = catalog();
        let visible = derive_visible_projects(
            catalog.projects(),
            &FilterCriteria::new().with_sort(SortKey::Oldest),
        );
        assert_eq!(ids(&visible), vec!["p4", "p2", "p1", "p3"]);
    }

    #[test]
    fn test_seo_scenario() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_query("seo");
        let visible = derive_visible_projects(catalog.projects(), &criteria);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].brand, "Velora");
        assert!(visible[0].offers(Service::Seo));
    }

    #[test]
    fn test_compare_brands_ignores_case() {
        let collator = brand_collator();
        assert!(collator.is_some());
        for collator in [collator.as_ref(), None] {
            assert_eq!(compare_brands(collator, "apple", "Banana"), Ordering::Less);
            assert_eq!(compare_brands(collator, "Zeta", "alpha"), Ordering::Greater);
            assert_ne!(compare_brands(collator, "Velora", "velora"), Ordering::Equal);
        }
    }

    #[test]
    fn test_brand_sort_handles_accents_and_case() {
        let mut projects = catalog().projects().to_vec();
        for (project, brand) in projects.iter_mut().zip(["Zeta", "Émile", "velora", "Velora"]) {
            project.brand = brand.to_string();
        }

        let ascending = derive_visible_projects(
            &projects,
            &FilterCriteria::new().with_sort(SortKey::BrandAscending),
        );
        assert_eq!(brands(&ascending), vec!["Émile", "velora", "Velora", "Zeta"]);

        let descending = derive_visible_projects(
            &projects,
            &FilterCriteria::new().with_sort(SortKey::BrandDescending),
        );
        assert_eq!(brands(&descending), vec!["Zeta", "Velora", "velora", "Émile"]);
    }
}
