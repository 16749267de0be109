use crate::domain::model::{
    ArtifactPlan, ArtifactRole, NavEntry, NavigationModel, PageId, PlannedArtifact, Route,
    RouteTable, Tier,
};

pub const SCRIPT_EXT: &str = "jsx";

/// 未匹配路徑與根路徑都導向此頁
pub const FALLBACK_PAGE: PageId = PageId::Level1;

struct PageRow {
    page: PageId,
    min_tier: Tier,
    route: &'static str,
    label: &'static str,
}

/// 頁面、導覽、路由三者唯一的資料來源
static PAGE_TABLE: [PageRow; 4] = [
    PageRow {
        page: PageId::Level1,
        min_tier: Tier::Common,
        route: "/level1",
        label: "Level 1",
    },
    PageRow {
        page: PageId::Level2,
        min_tier: Tier::Expanded,
        route: "/level2",
        label: "Level 2",
    },
    PageRow {
        page: PageId::Level3,
        min_tier: Tier::Full,
        route: "/level3",
        label: "Level 3",
    },
    PageRow {
        page: PageId::About,
        min_tier: Tier::Common,
        route: "/about",
        label: "About",
    },
];

fn script(stem: &str) -> String {
    format!("src/{}.{}", stem, SCRIPT_EXT)
}

pub fn artifact_path(role: ArtifactRole) -> String {
    match role {
        ArtifactRole::EntryPoint => script("main"),
        ArtifactRole::Stylesheet => "src/main.css".to_string(),
        ArtifactRole::AppShell => script("App"),
        ArtifactRole::Header => script("components/Header"),
        ArtifactRole::Footer => script("components/Footer"),
        ArtifactRole::Page(page) => script(&format!("pages/{}", page.component())),
    }
}

/// 頁面表中該等級可用的列，維持表格順序
fn rows_for(tier: Tier) -> impl Iterator<Item = &'static PageRow> {
    PAGE_TABLE.iter().filter(move |row| row.min_tier <= tier)
}

pub fn pages_for(tier: Tier) -> Vec<PageId> {
    rows_for(tier).map(|row| row.page).collect()
}

pub fn plan(tier: Tier) -> ArtifactPlan {
    let rows: Vec<&PageRow> = rows_for(tier).collect();

    let shell_roles = [
        ArtifactRole::EntryPoint,
        ArtifactRole::Stylesheet,
        ArtifactRole::AppShell,
        ArtifactRole::Header,
        ArtifactRole::Footer,
    ];

    let artifacts = shell_roles
        .into_iter()
        .chain(rows.iter().map(|row| ArtifactRole::Page(row.page)))
        .map(|role| PlannedArtifact {
            path: artifact_path(role),
            role,
        })
        .collect();

    let navigation = NavigationModel {
        entries: rows
            .iter()
            .map(|row| NavEntry {
                path: row.route,
                label: row.label,
                page: row.page,
            })
            .collect(),
    };

    let routes = RouteTable {
        pages: rows
            .iter()
            .map(|row| Route {
                path: row.route,
                page: row.page,
            })
            .collect(),
        aliases: vec![
            Route {
                path: "/",
                page: FALLBACK_PAGE,
            },
            Route {
                path: "*",
                page: FALLBACK_PAGE,
            },
        ],
    };

    tracing::debug!(
        "Planned {} pages for tier '{}': {:?}",
        rows.len(),
        tier,
        rows.iter().map(|r| r.page).collect::<Vec<_>>()
    );

    ArtifactPlan {
        tier,
        artifacts,
        navigation,
        routes,
    }
}
