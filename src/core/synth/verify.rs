//! 產出後的一致性檢查。
//!
//! 直接解析產生的文字（import、`<Route>`、`<Link>`），與計畫及套件清單比對。
//! 任何不一致都代表產生邏輯本身有錯，回傳 `InvariantViolation`。

use super::module::{package_of, parse_dynamic_imports, parse_imports};
use crate::core::planner::SCRIPT_EXT;
use crate::core::tiers::TEMPLATE_PROVIDED;
use crate::domain::model::{Artifact, ArtifactPlan, ArtifactRole, PackageSet};
use crate::utils::error::{KickstartError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn route_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<Route path="([^"]+)" element=\{<(\w+) />\} />"#).unwrap())
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<Link to="([^"]+)" className="nav-link">([^<]+)</Link>"#).unwrap())
}

/// 從 App 內容解析出 `(path, component)` 路由
pub fn parse_routes(content: &str) -> Vec<(String, String)> {
    route_re()
        .captures_iter(content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// 從 Header 內容解析出 `(path, label)` 導覽連結
pub fn parse_nav_links(content: &str) -> Vec<(String, String)> {
    link_re()
        .captures_iter(content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

pub fn verify(plan: &ArtifactPlan, packages: &PackageSet, artifacts: &[Artifact]) -> Result<()> {
    check_artifact_set(plan, artifacts)?;

    let app = find(artifacts, ArtifactRole::AppShell)?;
    check_page_imports(plan, app)?;
    check_routes(plan, app)?;

    let header = find(artifacts, ArtifactRole::Header)?;
    check_nav_links(plan, header)?;

    for artifact in artifacts {
        check_package_references(packages, artifact)?;
        check_relative_imports(artifacts, artifact)?;
    }

    tracing::debug!(
        "Consistency audit passed for {} artifacts (tier '{}')",
        artifacts.len(),
        plan.tier
    );
    Ok(())
}

fn find(artifacts: &[Artifact], role: ArtifactRole) -> Result<&Artifact> {
    artifacts
        .iter()
        .find(|a| a.role == role)
        .ok_or_else(|| KickstartError::invariant(&format!("{:?}", role), "artifact was not produced"))
}

fn check_artifact_set(plan: &ArtifactPlan, artifacts: &[Artifact]) -> Result<()> {
    if artifacts.len() != plan.artifacts.len() {
        return Err(KickstartError::invariant(
            "<plan>",
            format!(
                "{} artifacts produced for {} planned entries",
                artifacts.len(),
                plan.artifacts.len()
            ),
        ));
    }

    for (artifact, planned) in artifacts.iter().zip(plan.artifacts.iter()) {
        if artifact.path != planned.path || artifact.role != planned.role {
            return Err(KickstartError::invariant(
                &artifact.path,
                format!("expected {} ({:?})", planned.path, planned.role),
            ));
        }
    }
    Ok(())
}

fn check_page_imports(plan: &ArtifactPlan, app: &Artifact) -> Result<()> {
    let imported: Vec<(String, String)> = parse_imports(&app.content)
        .into_iter()
        .filter(|decl| decl.source.starts_with("./pages/"))
        .map(|decl| {
            let name = decl.bound_names().first().map(|n| n.to_string()).unwrap_or_default();
            (name, decl.source)
        })
        .collect();

    let expected: Vec<(String, String)> = plan
        .pages()
        .iter()
        .map(|page| (page.component().to_string(), page.import_path()))
        .collect();

    if imported != expected {
        return Err(KickstartError::invariant(
            &app.path,
            format!("page imports {:?} do not match planned pages {:?}", imported, expected),
        ));
    }
    Ok(())
}

fn check_routes(plan: &ArtifactPlan, app: &Artifact) -> Result<()> {
    let rendered = parse_routes(&app.content);
    let expected: Vec<(String, String)> = plan
        .routes
        .rendered()
        .iter()
        .map(|r| (r.path.to_string(), r.page.component().to_string()))
        .collect();

    if rendered != expected {
        return Err(KickstartError::invariant(
            &app.path,
            format!("routes {:?} do not match route table {:?}", rendered, expected),
        ));
    }
    Ok(())
}

fn check_nav_links(plan: &ArtifactPlan, header: &Artifact) -> Result<()> {
    let links = parse_nav_links(&header.content);
    let expected: Vec<(String, String)> = plan
        .navigation
        .entries
        .iter()
        .map(|e| (e.path.to_string(), e.label.to_string()))
        .collect();

    if links != expected {
        return Err(KickstartError::invariant(
            &header.path,
            format!("nav links {:?} do not match navigation {:?}", links, expected),
        ));
    }

    let route_paths: Vec<&str> = plan.routes.pages.iter().map(|r| r.path).collect();
    if let Some((path, _)) = links.iter().find(|(path, _)| !route_paths.contains(&path.as_str())) {
        return Err(KickstartError::invariant(
            &header.path,
            format!("nav link {} has no registered route", path),
        ));
    }
    Ok(())
}

fn check_package_references(packages: &PackageSet, artifact: &Artifact) -> Result<()> {
    let specifiers = parse_imports(&artifact.content)
        .into_iter()
        .map(|decl| decl.source)
        .chain(parse_dynamic_imports(&artifact.content));

    for specifier in specifiers {
        if let Some(package) = package_of(&specifier) {
            if !packages.contains(package) && !TEMPLATE_PROVIDED.contains(&package) {
                return Err(KickstartError::invariant(
                    &artifact.path,
                    format!("references '{}' which is not installed for this tier", package),
                ));
            }
        }
    }
    Ok(())
}

/// 相對 import 必須指向本次產出的檔案
fn check_relative_imports(artifacts: &[Artifact], artifact: &Artifact) -> Result<()> {
    let base_dir = artifact
        .path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or("");

    for decl in parse_imports(&artifact.content) {
        if package_of(&decl.source).is_some() {
            continue;
        }

        let target = join_relative(base_dir, &decl.source);
        let exists = artifacts
            .iter()
            .any(|a| resolves_to(&a.path, &target));
        if !exists {
            return Err(KickstartError::invariant(
                &artifact.path,
                format!("imports '{}' but {} is not generated", decl.source, target),
            ));
        }
    }
    Ok(())
}

/// import 可以省略腳本副檔名，樣式檔則必須寫完整
fn resolves_to(path: &str, target: &str) -> bool {
    path == target
        || path
            .strip_suffix(SCRIPT_EXT)
            .and_then(|stem| stem.strip_suffix('.'))
            == Some(target)
}

fn join_relative(base_dir: &str, specifier: &str) -> String {
    let mut parts: Vec<&str> = base_dir.split('/').filter(|p| !p.is_empty()).collect();
    for segment in specifier.split('/') {
        match segment {
            "." | "" => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}
