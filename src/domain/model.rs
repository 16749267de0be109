use crate::utils::error::KickstartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 套件等級，順序即包含關係：Common ⊂ Expanded ⊂ Full
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Common,
    Expanded,
    Full,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Common, Tier::Expanded, Tier::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Common => "common",
            Tier::Expanded => "expanded",
            Tier::Full => "full",
        }
    }

    /// 互動選單上顯示的名稱
    pub fn menu_label(&self) -> &'static str {
        match self {
            Tier::Common => "1) Common Essentials",
            Tier::Expanded => "2) Expanded Essentials",
            Tier::Full => "3) Full Essentials",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = KickstartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" | "1" => Ok(Tier::Common),
            "expanded" | "2" => Ok(Tier::Expanded),
            "full" | "3" => Ok(Tier::Full),
            other => Err(KickstartError::InvalidConfigValueError {
                field: "tier".to_string(),
                value: other.to_string(),
                reason: "Expected one of: common, expanded, full".to_string(),
            }),
        }
    }
}

/// 正規化後的專案名稱，只能透過 `core::normalize` 建立
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectSlug(String);

impl ProjectSlug {
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageSet {
    packages: Vec<&'static str>,
}

impl PackageSet {
    pub(crate) fn new(packages: Vec<&'static str>) -> Self {
        Self { packages }
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|p| *p == package)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.packages.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn is_subset_of(&self, other: &PackageSet) -> bool {
        self.iter().all(|p| other.contains(p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PageId {
    Level1,
    Level2,
    Level3,
    About,
}

impl PageId {
    /// 元件名稱，同時也是檔名
    pub fn component(&self) -> &'static str {
        match self {
            PageId::Level1 => "Level1",
            PageId::Level2 => "Level2",
            PageId::Level3 => "Level3",
            PageId::About => "About",
        }
    }

    pub fn import_path(&self) -> String {
        format!("./pages/{}", self.component())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum ArtifactRole {
    EntryPoint,
    Stylesheet,
    AppShell,
    Header,
    Footer,
    Page(PageId),
}

impl ArtifactRole {
    pub fn page(&self) -> Option<PageId> {
        match self {
            ArtifactRole::Page(page) => Some(*page),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub path: String,
    pub role: ArtifactRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub page: PageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NavigationModel {
    pub entries: Vec<NavEntry>,
}

impl NavigationModel {
    pub fn paths(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.path).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
}

/// 每個頁面一條路由，另有 `/` 與 `*` 兩條別名指向 fallback 頁面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    pub pages: Vec<Route>,
    pub aliases: Vec<Route>,
}

impl RouteTable {
    /// 依 App.jsx 中的輸出順序：別名 `/` 在前，頁面路由，最後 `*`
    pub fn rendered(&self) -> Vec<&Route> {
        let (catch_all, root): (Vec<&Route>, Vec<&Route>) =
            self.aliases.iter().partition(|r| r.path == "*");
        root.into_iter()
            .chain(self.pages.iter())
            .chain(catch_all)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub tier: Tier,
    pub artifacts: Vec<PlannedArtifact>,
    pub navigation: NavigationModel,
    pub routes: RouteTable,
}

impl ArtifactPlan {
    pub fn pages(&self) -> Vec<PageId> {
        self.artifacts.iter().filter_map(|a| a.role.page()).collect()
    }

    pub fn path_of(&self, role: ArtifactRole) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.path.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: String,
    pub role: ArtifactRole,
    pub content: String,
}

/// 外部輸入：尚未正規化的名稱與等級
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    pub raw_name: String,
    pub tier: Tier,
}
