use super::module::{ImportDecl, ModuleSource};
use super::SynthContext;

pub fn entry_point() -> ModuleSource {
    ModuleSource::new(
        vec![
            ImportDecl::default("React", "react"),
            ImportDecl::default("ReactDOM", "react-dom/client"),
            ImportDecl::default("App", "./App"),
            ImportDecl::side_effect("./main.css"),
        ],
        r#"ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#
        .to_string(),
    )
}

/// 頁面 import 與 `<Route>` 皆由計畫產生，兩者不會各自增減
pub fn app_shell(ctx: &SynthContext<'_>) -> ModuleSource {
    let mut imports = vec![
        ImportDecl::named(&["useState", "useEffect"], "react"),
        ImportDecl::named(
            &["BrowserRouter as Router", "Routes", "Route"],
            "react-router-dom",
        ),
        ImportDecl::default("Header", "./components/Header"),
        ImportDecl::default("Footer", "./components/Footer"),
    ];
    for page in ctx.plan.pages() {
        imports.push(ImportDecl::default(page.component(), &page.import_path()));
    }
    imports.push(ImportDecl::side_effect("./main.css"));

    let routes: String = ctx
        .plan
        .routes
        .rendered()
        .iter()
        .map(|route| {
            format!(
                "            <Route path=\"{}\" element={{<{} />}} />\n",
                route.path,
                route.page.component()
            )
        })
        .collect();

    let mut body = String::new();
    body.push_str(
        r#"function App() {
  const [darkMode, setDarkMode] = useState(true);
  const toggleDarkMode = () => setDarkMode(prev => !prev);

  useEffect(() => {
    document.documentElement.setAttribute('data-theme', darkMode ? 'dark' : 'light');
  }, [darkMode]);

  return (
    <Router>
      <div className="app-container">
        <Header darkMode={darkMode} toggleDarkMode={toggleDarkMode} />
        <main>
          <Routes>
"#,
    );
    body.push_str(&routes);
    body.push_str(
        r#"          </Routes>
        </main>
        <Footer />
      </div>
    </Router>
  );
}

export default App;
"#,
    );

    ModuleSource::new(imports, body)
}

pub fn header(ctx: &SynthContext<'_>) -> ModuleSource {
    let with_classnames = ctx.has("classnames");
    let with_prop_types = ctx.has("prop-types");

    let mut imports = vec![
        ImportDecl::default("React", "react"),
        ImportDecl::named(&["Link"], "react-router-dom"),
        ImportDecl::default("DarkModeToggle", "react-dark-mode-toggle"),
    ];
    if with_classnames {
        imports.push(ImportDecl::default("classNames", "classnames"));
    }
    imports.push(ImportDecl::default("MenuIcon", "@mui/icons-material/Menu"));
    if with_prop_types {
        imports.push(ImportDecl::default("PropTypes", "prop-types"));
    }

    let class_attr = if with_classnames {
        "className={classNames('header')}"
    } else {
        "className=\"header\""
    };

    let links: String = ctx
        .plan
        .navigation
        .entries
        .iter()
        .map(|entry| {
            format!(
                "          <Link to=\"{}\" className=\"nav-link\">{}</Link>\n",
                entry.path, entry.label
            )
        })
        .collect();

    let mut body = String::new();
    body.push_str("const Header = ({ darkMode, toggleDarkMode }) => {\n  return (\n");
    body.push_str(&format!("    <header {}>\n", class_attr));
    body.push_str(
        r#"      <div className="header-left" style={{ display: 'flex', alignItems: 'center' }}>
        <MenuIcon style={{ marginRight: '0.5rem' }} />
        <nav>
"#,
    );
    body.push_str(&links);
    body.push_str(
        r#"        </nav>
      </div>
      <div>
        <DarkModeToggle
          onChange={toggleDarkMode}
          checked={darkMode}
          size={60}
        />
      </div>
    </header>
  );
};

"#,
    );
    if with_prop_types {
        body.push_str(
            r#"Header.propTypes = {
  darkMode: PropTypes.bool.isRequired,
  toggleDarkMode: PropTypes.func.isRequired,
};

"#,
        );
    }
    body.push_str("export default Header;\n");

    ModuleSource::new(imports, body)
}

pub fn footer(ctx: &SynthContext<'_>) -> ModuleSource {
    let with_prop_types = ctx.has("prop-types");

    let mut imports = vec![ImportDecl::default("React", "react")];
    if with_prop_types {
        imports.push(ImportDecl::default("PropTypes", "prop-types"));
    }

    let mut body = format!(
        r#"const Footer = () => {{
  return (
    <footer className="footer">
      <p>{} &copy; {{new Date().getFullYear()}}</p>
    </footer>
  );
}};

"#,
        ctx.slug
    );
    if with_prop_types {
        body.push_str("Footer.propTypes = {};\n\n");
    }
    body.push_str("export default Footer;\n");

    ModuleSource::new(imports, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize::normalize, planner::plan, tiers::resolve};
    use crate::domain::model::Tier;

    #[test]
    fn test_header_without_presentation_packages() {
        let plan = plan(Tier::Common);
        let packages = resolve(Tier::Common);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = header(&ctx).render();
        assert!(!rendered.contains("classnames"));
        assert!(!rendered.contains("PropTypes"));
        assert!(rendered.contains("<header className=\"header\">"));
    }

    #[test]
    fn test_footer_shows_slug() {
        let plan = plan(Tier::Expanded);
        let packages = resolve(Tier::Expanded);
        let slug = normalize("My Cool App").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = footer(&ctx).render();
        assert!(rendered.contains("<p>my-cool-app &copy; {new Date().getFullYear()}</p>"));
        assert!(rendered.contains("Footer.propTypes = {};"));
    }

    #[test]
    fn test_app_shell_routes_in_order() {
        let plan = plan(Tier::Expanded);
        let packages = resolve(Tier::Expanded);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = app_shell(&ctx).render();
        let root = rendered.find("<Route path=\"/\" element={<Level1 />} />").unwrap();
        let level2 = rendered.find("<Route path=\"/level2\" element={<Level2 />} />").unwrap();
        let catch_all = rendered.find("<Route path=\"*\" element={<Level1 />} />").unwrap();
        assert!(root < level2 && level2 < catch_all);
        assert!(!rendered.contains("Level3"));
    }
}
