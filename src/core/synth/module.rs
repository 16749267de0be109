//! JS 模組的結構化表示：import 宣告 + 主體文字。
//!
//! 產生時先組出 `ModuleSource`，最後才由 `render` 轉成文字；
//! `parse_imports` 則把文字還原成同樣的結構，供一致性檢查使用。

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportClause {
    SideEffect,
    Default(String),
    Named(Vec<String>),
    DefaultAndNamed(String, Vec<String>),
    Namespace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub clause: ImportClause,
    pub source: String,
}

impl ImportDecl {
    pub fn default(name: &str, source: &str) -> Self {
        Self {
            clause: ImportClause::Default(name.to_string()),
            source: source.to_string(),
        }
    }

    pub fn named(names: &[&str], source: &str) -> Self {
        Self {
            clause: ImportClause::Named(names.iter().map(|n| n.to_string()).collect()),
            source: source.to_string(),
        }
    }

    pub fn default_and_named(name: &str, names: &[&str], source: &str) -> Self {
        Self {
            clause: ImportClause::DefaultAndNamed(
                name.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            ),
            source: source.to_string(),
        }
    }

    pub fn namespace(name: &str, source: &str) -> Self {
        Self {
            clause: ImportClause::Namespace(name.to_string()),
            source: source.to_string(),
        }
    }

    pub fn side_effect(source: &str) -> Self {
        Self {
            clause: ImportClause::SideEffect,
            source: source.to_string(),
        }
    }

    /// 此宣告在模組內引入的本地名稱（`A as B` 取 `B`）
    pub fn bound_names(&self) -> Vec<&str> {
        fn local(spec: &str) -> &str {
            spec.rsplit(" as ").next().unwrap_or(spec).trim()
        }

        match &self.clause {
            ImportClause::SideEffect => Vec::new(),
            ImportClause::Default(name) | ImportClause::Namespace(name) => vec![name.as_str()],
            ImportClause::Named(names) => names.iter().map(|n| local(n)).collect(),
            ImportClause::DefaultAndNamed(name, names) => std::iter::once(name.as_str())
                .chain(names.iter().map(|n| local(n)))
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        match &self.clause {
            ImportClause::SideEffect => format!("import '{}';", self.source),
            ImportClause::Default(name) => format!("import {} from '{}';", name, self.source),
            ImportClause::Named(names) => {
                format!("import {{ {} }} from '{}';", names.join(", "), self.source)
            }
            ImportClause::DefaultAndNamed(name, names) => format!(
                "import {}, {{ {} }} from '{}';",
                name,
                names.join(", "),
                self.source
            ),
            ImportClause::Namespace(name) => {
                format!("import * as {} from '{}';", name, self.source)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    pub imports: Vec<ImportDecl>,
    pub body: String,
}

impl ModuleSource {
    pub fn new(imports: Vec<ImportDecl>, body: String) -> Self {
        Self { imports, body }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str(&import.render());
            out.push('\n');
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }
        out.push_str(self.body.trim_start_matches('\n'));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

fn static_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^import\s+(?:(.+?)\s+from\s+)?'([^']+)';[ \t]*$").unwrap()
    })
}

fn dynamic_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bimport\(\s*'([^']+)'\s*\)").unwrap())
}

fn parse_clause(raw: &str) -> ImportClause {
    let raw = raw.trim();
    if let Some(name) = raw.strip_prefix("* as ") {
        return ImportClause::Namespace(name.trim().to_string());
    }

    match (raw.find('{'), raw.rfind('}')) {
        (Some(open), Some(close)) if open < close => {
            let names: Vec<String> = raw[open + 1..close]
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect();
            let default = raw[..open].trim().trim_end_matches(',').trim();
            if default.is_empty() {
                ImportClause::Named(names)
            } else {
                ImportClause::DefaultAndNamed(default.to_string(), names)
            }
        }
        _ => ImportClause::Default(raw.to_string()),
    }
}

/// 解析模組開頭的靜態 import 宣告
pub fn parse_imports(content: &str) -> Vec<ImportDecl> {
    static_import_re()
        .captures_iter(content)
        .map(|caps| ImportDecl {
            clause: caps
                .get(1)
                .map(|m| parse_clause(m.as_str()))
                .unwrap_or(ImportClause::SideEffect),
            source: caps[2].to_string(),
        })
        .collect()
}

/// `import('pkg')` 形式的動態載入
pub fn parse_dynamic_imports(content: &str) -> Vec<String> {
    dynamic_import_re()
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// 模組路徑對應的 npm 套件名稱；相對路徑回傳 None
pub fn package_of(specifier: &str) -> Option<&str> {
    if specifier.starts_with('.') || specifier.starts_with('/') {
        return None;
    }

    let mut segments = specifier.splitn(3, '/');
    let first = segments.next()?;
    if first.starts_with('@') {
        let second = segments.next()?;
        Some(&specifier[..first.len() + 1 + second.len()])
    } else {
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_clause() {
        assert_eq!(
            ImportDecl::default("App", "./App").render(),
            "import App from './App';"
        );
        assert_eq!(
            ImportDecl::named(&["useState", "useEffect"], "react").render(),
            "import { useState, useEffect } from 'react';"
        );
        assert_eq!(
            ImportDecl::default_and_named("React", &["Suspense"], "react").render(),
            "import React, { Suspense } from 'react';"
        );
        assert_eq!(
            ImportDecl::namespace("yup", "yup").render(),
            "import * as yup from 'yup';"
        );
        assert_eq!(
            ImportDecl::side_effect("./main.css").render(),
            "import './main.css';"
        );
    }

    #[test]
    fn test_parse_recovers_structure() {
        let module = ModuleSource::new(
            vec![
                ImportDecl::default_and_named("React", &["useState", "Suspense"], "react"),
                ImportDecl::named(&["BrowserRouter as Router", "Routes"], "react-router-dom"),
                ImportDecl::namespace("yup", "yup"),
                ImportDecl::side_effect("./main.css"),
            ],
            "export default 1;\n".to_string(),
        );

        let parsed = parse_imports(&module.render());
        assert_eq!(parsed, module.imports);
        assert_eq!(parsed[1].bound_names(), vec!["Router", "Routes"]);
    }

    #[test]
    fn test_parse_ignores_indented_lines() {
        let content = "import A from 'a';\nconst x = 1;\n  import B from 'b';\n";
        let parsed = parse_imports(content);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "a");
    }

    #[test]
    fn test_dynamic_imports() {
        let content = "const Lazy = React.lazy(() =>\n  import('react-confetti').catch(() => null)\n);";
        assert_eq!(parse_dynamic_imports(content), vec!["react-confetti"]);
    }

    #[test]
    fn test_package_of() {
        assert_eq!(package_of("react-icons/fa"), Some("react-icons"));
        assert_eq!(package_of("@mui/icons-material/Menu"), Some("@mui/icons-material"));
        assert_eq!(package_of("@mui/material"), Some("@mui/material"));
        assert_eq!(package_of("react-dom/client"), Some("react-dom"));
        assert_eq!(package_of("./pages/Level1"), None);
        assert_eq!(package_of("../main.css"), None);
    }
}
