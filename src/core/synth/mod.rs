pub mod module;
mod pages;
mod shell;
mod styles;
pub mod verify;

use crate::domain::model::{
    Artifact, ArtifactPlan, ArtifactRole, PackageSet, ProjectSlug,
};
use module::ModuleSource;

/// 單一檔案在轉成文字前的結構化內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactBody {
    Module(ModuleSource),
    Stylesheet(&'static str),
}

impl ArtifactBody {
    pub fn render(&self) -> String {
        match self {
            ArtifactBody::Module(module) => module.render(),
            ArtifactBody::Stylesheet(css) => css.to_string(),
        }
    }
}

/// 產生內容時唯讀共用的輸入
pub(crate) struct SynthContext<'a> {
    pub plan: &'a ArtifactPlan,
    pub packages: &'a PackageSet,
    pub slug: &'a ProjectSlug,
}

impl SynthContext<'_> {
    pub fn has(&self, package: &str) -> bool {
        self.packages.contains(package)
    }
}

pub fn compose(
    plan: &ArtifactPlan,
    packages: &PackageSet,
    slug: &ProjectSlug,
    role: ArtifactRole,
) -> ArtifactBody {
    let ctx = SynthContext {
        plan,
        packages,
        slug,
    };

    match role {
        ArtifactRole::EntryPoint => ArtifactBody::Module(shell::entry_point()),
        ArtifactRole::Stylesheet => ArtifactBody::Stylesheet(styles::MAIN_CSS),
        ArtifactRole::AppShell => ArtifactBody::Module(shell::app_shell(&ctx)),
        ArtifactRole::Header => ArtifactBody::Module(shell::header(&ctx)),
        ArtifactRole::Footer => ArtifactBody::Module(shell::footer(&ctx)),
        ArtifactRole::Page(page) => ArtifactBody::Module(pages::page(&ctx, page)),
    }
}

/// 依計畫順序為每個規劃的檔案產生內容。純函式：相同輸入必得相同輸出。
pub fn synthesize(plan: &ArtifactPlan, packages: &PackageSet, slug: &ProjectSlug) -> Vec<Artifact> {
    plan.artifacts
        .iter()
        .map(|planned| Artifact {
            path: planned.path.clone(),
            role: planned.role,
            content: compose(plan, packages, slug, planned.role).render(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize::normalize, planner::plan, tiers::resolve};
    use crate::domain::model::{PageId, Tier};

    #[test]
    fn test_one_artifact_per_planned_role() {
        for tier in Tier::ALL {
            let plan = plan(tier);
            let artifacts = synthesize(&plan, &resolve(tier), &normalize("demo").unwrap());
            assert_eq!(artifacts.len(), plan.artifacts.len());
            for (artifact, planned) in artifacts.iter().zip(plan.artifacts.iter()) {
                assert_eq!(artifact.path, planned.path);
                assert_eq!(artifact.role, planned.role);
                assert!(!artifact.content.is_empty());
            }
        }
    }

    #[test]
    fn test_deterministic_output() {
        let plan = plan(Tier::Full);
        let packages = resolve(Tier::Full);
        let slug = normalize("Repeatable Build").unwrap();
        assert_eq!(
            synthesize(&plan, &packages, &slug),
            synthesize(&plan, &packages, &slug)
        );
    }

    #[test]
    fn test_compose_keeps_structure() {
        let plan = plan(Tier::Common);
        let body = compose(
            &plan,
            &resolve(Tier::Common),
            &normalize("demo").unwrap(),
            ArtifactRole::Page(PageId::About),
        );
        match body {
            ArtifactBody::Module(module) => {
                assert!(module.imports.iter().all(|i| i.source != "react-helmet"));
            }
            ArtifactBody::Stylesheet(_) => panic!("About page must be a module"),
        }
    }
}
