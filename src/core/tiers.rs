use crate::domain::model::{PackageSet, Tier};

const COMMON_PACKAGES: &[&str] = &[
    "@mui/material",
    "@mui/icons-material",
    "@emotion/react",
    "@emotion/styled",
    "react-router-dom",
    "react-icons",
    "axios",
    "lodash",
    "framer-motion",
    "react-dark-mode-toggle",
    "yup",
    "formik",
];

// 展示用套件
const EXPANDED_PACKAGES: &[&str] = &[
    "prop-types",
    "classnames",
    "react-helmet",
    "styled-components",
];

// 互動與資料抓取
const FULL_PACKAGES: &[&str] = &["react-confetti", "dayjs", "swr", "immer"];

/// 每一列是該等級新增的套件；解析時依序串接所有 <= 目標等級的列
const TIER_TABLE: [(Tier, &[&str]); 3] = [
    (Tier::Common, COMMON_PACKAGES),
    (Tier::Expanded, EXPANDED_PACKAGES),
    (Tier::Full, FULL_PACKAGES),
];

/// 套件由 Vite 的 react 模板提供，不在安裝清單內
pub const TEMPLATE_PROVIDED: &[&str] = &["react", "react-dom"];

pub fn resolve(tier: Tier) -> PackageSet {
    let mut packages: Vec<&'static str> = Vec::new();
    for (row_tier, row) in TIER_TABLE.iter() {
        if *row_tier > tier {
            break;
        }
        for package in row.iter().copied() {
            if !packages.contains(&package) {
                packages.push(package);
            }
        }
    }
    PackageSet::new(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_common_matches_table() {
        assert_eq!(resolve(Tier::Common).as_slice(), COMMON_PACKAGES);
    }

    #[test]
    fn test_expanded_adds_presentation_packages() {
        let expanded = resolve(Tier::Expanded);
        assert_eq!(expanded.len(), COMMON_PACKAGES.len() + EXPANDED_PACKAGES.len());
        for package in ["prop-types", "classnames", "react-helmet", "styled-components"] {
            assert!(expanded.contains(package));
        }
        assert!(!expanded.contains("swr"));
    }

    #[test]
    fn test_full_is_complete_superset() {
        let full = resolve(Tier::Full);
        for package in ["react-confetti", "dayjs", "swr", "immer"] {
            assert!(full.contains(package));
        }
        assert_eq!(full.len(), 20);
    }

    #[test]
    fn test_monotonic_superset() {
        for lower in Tier::ALL {
            for higher in Tier::ALL.into_iter().filter(|t| *t >= lower) {
                assert!(
                    resolve(lower).is_subset_of(&resolve(higher)),
                    "{} is not a subset of {}",
                    lower,
                    higher
                );
            }
        }
    }

    #[test]
    fn test_no_duplicates_and_stable_order() {
        for tier in Tier::ALL {
            let set = resolve(tier);
            let unique: HashSet<_> = set.iter().collect();
            assert_eq!(unique.len(), set.len());
            assert_eq!(set, resolve(tier));
        }
    }

    #[test]
    fn test_template_packages_not_installed() {
        let full = resolve(Tier::Full);
        assert!(TEMPLATE_PROVIDED.iter().all(|p| !full.contains(p)));
    }
}
