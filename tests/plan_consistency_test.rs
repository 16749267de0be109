use std::collections::BTreeSet;
use vite_kickstart::core::normalize::normalize;
use vite_kickstart::core::planner::plan;
use vite_kickstart::core::synth::module::{package_of, parse_dynamic_imports, parse_imports};
use vite_kickstart::core::synth::synthesize;
use vite_kickstart::core::synth::verify::{parse_nav_links, parse_routes};
use vite_kickstart::core::tiers::{resolve, TEMPLATE_PROVIDED};
use vite_kickstart::domain::model::{Artifact, ArtifactRole, PageId};
use vite_kickstart::{prepare, ScaffoldRequest, Tier};

fn artifacts_for(tier: Tier) -> Vec<Artifact> {
    prepare(&ScaffoldRequest {
        raw_name: "Consistency Check".to_string(),
        tier,
    })
    .unwrap()
    .artifacts
}

fn content_of(artifacts: &[Artifact], role: ArtifactRole) -> &str {
    &artifacts.iter().find(|a| a.role == role).unwrap().content
}

#[test]
fn test_full_app_shell_imports_exactly_all_pages() {
    let artifacts = artifacts_for(Tier::Full);
    let app = content_of(&artifacts, ArtifactRole::AppShell);

    let page_imports: Vec<(String, String)> = parse_imports(app)
        .into_iter()
        .filter(|decl| decl.source.starts_with("./pages/"))
        .map(|decl| (decl.bound_names()[0].to_string(), decl.source.clone()))
        .collect();

    assert_eq!(
        page_imports,
        vec![
            ("Level1".to_string(), "./pages/Level1".to_string()),
            ("Level2".to_string(), "./pages/Level2".to_string()),
            ("Level3".to_string(), "./pages/Level3".to_string()),
            ("About".to_string(), "./pages/About".to_string()),
        ]
    );
}

#[test]
fn test_routes_and_nav_links_match_plan_for_every_tier() {
    for tier in Tier::ALL {
        let plan = plan(tier);
        let artifacts = artifacts_for(tier);

        let routes = parse_routes(content_of(&artifacts, ArtifactRole::AppShell));
        let page_routes: BTreeSet<(String, String)> = routes
            .iter()
            .filter(|(path, _)| path != "/" && path != "*")
            .cloned()
            .collect();
        let expected_routes: BTreeSet<(String, String)> = plan
            .pages()
            .iter()
            .zip(plan.navigation.entries.iter())
            .map(|(page, nav)| (nav.path.to_string(), page.component().to_string()))
            .collect();
        assert_eq!(page_routes, expected_routes, "route drift for {}", tier);

        // 根路徑與萬用路由都指向 Level1
        assert!(routes.contains(&("/".to_string(), "Level1".to_string())));
        assert!(routes.contains(&("*".to_string(), "Level1".to_string())));

        let links = parse_nav_links(content_of(&artifacts, ArtifactRole::Header));
        let expected_links: Vec<(String, String)> = plan
            .navigation
            .entries
            .iter()
            .map(|e| (e.path.to_string(), e.label.to_string()))
            .collect();
        assert_eq!(links, expected_links, "nav drift for {}", tier);
    }
}

#[test]
fn test_every_page_import_has_a_planned_file() {
    for tier in Tier::ALL {
        let artifacts = artifacts_for(tier);
        let paths: BTreeSet<&str> = artifacts.iter().map(|a| a.path.as_str()).collect();

        for decl in parse_imports(content_of(&artifacts, ArtifactRole::AppShell)) {
            if let Some(page) = decl.source.strip_prefix("./pages/") {
                let file = format!("src/pages/{}.jsx", page);
                assert!(paths.contains(file.as_str()), "{} missing for {}", file, tier);
            }
        }
    }
}

#[test]
fn test_no_artifact_references_packages_outside_its_tier() {
    for tier in Tier::ALL {
        let packages = resolve(tier);
        for artifact in artifacts_for(tier) {
            let specifiers = parse_imports(&artifact.content)
                .into_iter()
                .map(|d| d.source)
                .chain(parse_dynamic_imports(&artifact.content));
            for specifier in specifiers {
                if let Some(package) = package_of(&specifier) {
                    assert!(
                        packages.contains(package) || TEMPLATE_PROVIDED.contains(&package),
                        "{} imports {} on tier {}",
                        artifact.path,
                        package,
                        tier
                    );
                }
            }
        }
    }
}

#[test]
fn test_tier_specific_pages_use_tier_packages() {
    let full = artifacts_for(Tier::Full);
    let level3 = content_of(&full, ArtifactRole::Page(PageId::Level3));
    assert!(level3.contains("from 'swr'"));
    assert!(level3.contains("from 'immer'"));
    assert!(level3.contains("from 'dayjs'"));

    let expanded = artifacts_for(Tier::Expanded);
    let level2 = content_of(&expanded, ArtifactRole::Page(PageId::Level2));
    assert!(level2.contains("from 'styled-components'"));
    assert!(expanded.iter().all(|a| !a.content.contains("from 'swr'")));
}

#[test]
fn test_synthesis_is_byte_identical() {
    let slug = normalize("Same Input").unwrap();
    for tier in Tier::ALL {
        let plan = plan(tier);
        let packages = resolve(tier);
        let first = synthesize(&plan, &packages, &slug);
        let second = synthesize(&plan, &packages, &slug);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.content.as_bytes(), b.content.as_bytes());
        }
    }
}

#[test]
fn test_expanded_scenario() {
    let scaffold = prepare(&ScaffoldRequest {
        raw_name: "Second Scenario".to_string(),
        tier: Tier::Expanded,
    })
    .unwrap();

    assert_eq!(
        scaffold.plan.pages(),
        vec![PageId::Level1, PageId::Level2, PageId::About]
    );
    assert!(resolve(Tier::Common).is_subset_of(&scaffold.packages));
    assert!(scaffold.packages.contains("styled-components"));
    assert!(!scaffold.packages.contains("react-confetti"));
}
