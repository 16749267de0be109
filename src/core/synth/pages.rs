use super::module::{ImportDecl, ModuleSource};
use super::SynthContext;
use crate::domain::model::PageId;

pub fn page(ctx: &SynthContext<'_>, page: PageId) -> ModuleSource {
    match page {
        PageId::Level1 => level1(),
        PageId::Level2 => level2(ctx),
        PageId::Level3 => level3(),
        PageId::About => about(ctx),
    }
}

// Common：MUI、react-icons、framer-motion、axios + lodash、Formik + Yup
fn level1() -> ModuleSource {
    ModuleSource::new(
        vec![
            ImportDecl::default_and_named("React", &["useState"], "react"),
            ImportDecl::named(&["Button"], "@mui/material"),
            ImportDecl::named(&["FaReact"], "react-icons/fa"),
            ImportDecl::named(&["motion"], "framer-motion"),
            ImportDecl::default("axios", "axios"),
            ImportDecl::default("_", "lodash"),
            ImportDecl::namespace("yup", "yup"),
            ImportDecl::named(&["Formik", "Form", "Field", "ErrorMessage"], "formik"),
        ],
        r##"const formSchema = yup.object().shape({
  username: yup.string().required('Username is required').min(3, 'Must be at least 3 characters'),
  email: yup.string().required('Email is required').email('Invalid email format')
});

function Level1() {
  const [apiData, setApiData] = useState(null);

  const fetchAPIData = async () => {
    try {
      const response = await axios.get('https://api.github.com');
      const picked = _.pick(response.data, ['current_user_url', 'current_user_authorizations_html_url']);
      setApiData(picked);
    } catch (error) {
      console.error(error);
    }
  };

  return (
    <div className="page">
      <h1>Level 1: Essentials</h1>
      <motion.div animate={{ scale: 1.1 }} transition={{ duration: 0.5 }}>
        <FaReact size={64} color="#61dafb" />
      </motion.div>

      {/* Axios & Lodash API fetch demo */}
      <div className="section">
        <Button variant="outlined" onClick={fetchAPIData}>
          Fetch API Data (axios & lodash)
        </Button>
      </div>
      {apiData && (
        <div className="section" style={{ textAlign: 'left' }}>
          <h2>API Data:</h2>
          <pre>{JSON.stringify(apiData, null, 2)}</pre>
        </div>
      )}

      {/* Formik + Yup Form Validation Demo */}
      <div className="section" style={{ textAlign: 'left' }}>
        <h2>Formik + Yup Form Validation Demo:</h2>
        <Formik
          initialValues={{ username: '', email: '' }}
          validationSchema={formSchema}
          onSubmit={(values, { setSubmitting, resetForm }) => {
            alert('Form Submitted: ' + JSON.stringify(values, null, 2));
            setSubmitting(false);
            resetForm();
          }}
        >
          {({ isSubmitting }) => (
            <Form>
              <div className="form-group">
                <Field type="text" name="username" placeholder="Username" className="form-input" />
                <ErrorMessage name="username" component="div" className="form-error" />
              </div>
              <div className="form-group">
                <Field type="email" name="email" placeholder="Email" className="form-input" />
                <ErrorMessage name="email" component="div" className="form-error" />
              </div>
              <Button type="submit" variant="contained" color="secondary" disabled={isSubmitting}>
                Submit Form
              </Button>
            </Form>
          )}
        </Formik>
      </div>
    </div>
  );
}

export default Level1;
"##
        .to_string(),
    )
}

// Expanded：styled-components、classnames、prop-types、react-helmet
fn level2(ctx: &SynthContext<'_>) -> ModuleSource {
    let imports = vec![
        ImportDecl::default_and_named("React", &["useState"], "react"),
        ImportDecl::default("styled", "styled-components"),
        ImportDecl::default("classNames", "classnames"),
        ImportDecl::default("PropTypes", "prop-types"),
        ImportDecl::named(&["Helmet"], "react-helmet"),
    ];

    let mut body = String::from(
        r#"const CardGrid = styled.div`
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 1rem;
  margin-top: 1.5rem;
`;

const Card = styled.div`
  padding: 1rem;
  border-radius: 8px;
  border: 2px solid transparent;
  background-color: var(--color-header-background);
  transition: border-color var(--transition-duration);

  &.active {
    border-color: var(--color-primary);
  }
`;

const FeatureCard = ({ title, description, active, onSelect }) => (
  <Card className={classNames('feature-card', { active })} onClick={onSelect}>
    <h2>{title}</h2>
    <p>{description}</p>
  </Card>
);

FeatureCard.propTypes = {
  title: PropTypes.string.isRequired,
  description: PropTypes.string.isRequired,
  active: PropTypes.bool,
  onSelect: PropTypes.func.isRequired,
};

const FEATURES = [
  { title: 'styled-components', description: 'Component-scoped CSS written in JavaScript.' },
  { title: 'classnames', description: 'Conditional class names without string juggling.' },
  { title: 'prop-types', description: 'Runtime checks for component props.' },
  { title: 'react-helmet', description: 'Document head management per page.' },
];

function Level2() {
  const [selected, setSelected] = useState(0);

  return (
    <div className="page">
      <Helmet>
"#,
    );
    body.push_str(&format!("        <title>Level 2 - {}</title>\n", ctx.slug));
    body.push_str(
        r#"      </Helmet>
      <h1>Level 2: Presentation</h1>
      <p>Select a card to highlight it.</p>
      <CardGrid>
        {FEATURES.map((feature, index) => (
          <FeatureCard
            key={feature.title}
            title={feature.title}
            description={feature.description}
            active={index === selected}
            onSelect={() => setSelected(index)}
          />
        ))}
      </CardGrid>
    </div>
  );
}

export default Level2;
"#,
    );

    ModuleSource::new(imports, body)
}

// Full：react-confetti、dayjs、swr、immer
fn level3() -> ModuleSource {
    ModuleSource::new(
        vec![
            ImportDecl::default_and_named("React", &["useState", "Suspense"], "react"),
            ImportDecl::named(&["Button"], "@mui/material"),
            ImportDecl::default("axios", "axios"),
            ImportDecl::default("dayjs", "dayjs"),
            ImportDecl::named(&["produce"], "immer"),
            ImportDecl::default("useSWR", "swr"),
        ],
        r#"const LazyConfetti = React.lazy(() =>
  import('react-confetti').catch(() => ({ default: () => null }))
);

const fetcher = url => axios.get(url).then(res => res.data);

function Level3() {
  const [confettiActive, setConfettiActive] = useState(false);
  const [immerData, setImmerData] = useState({ value: 0 });
  const { data: jokeData, error: jokeError } = useSWR('https://api.chucknorris.io/jokes/random', fetcher);

  const handleConfetti = () => {
    setConfettiActive(true);
    setTimeout(() => setConfettiActive(false), 3000);
  };

  const handleImmerDemo = () => {
    setImmerData(produce(draft => {
      draft.value += 1;
    }));
  };

  return (
    <div className="page">
      <h1>Level 3: Interactive</h1>
      <p>Today is {dayjs().format('MMMM D, YYYY')}</p>

      <div className="section">
        <Button variant="contained" color="primary" onClick={handleConfetti}>
          MUI Button & Confetti!
        </Button>
      </div>

      {/* SWR demo for random joke */}
      <div className="section">
        <h2>Random Joke (SWR):</h2>
        {jokeError && <p>Error loading joke.</p>}
        {jokeData ? <p>{jokeData.value}</p> : <p>Loading joke...</p>}
      </div>

      {/* Immer demo */}
      <div className="section">
        <h2>Immer Demo:</h2>
        <p>Value: {immerData.value}</p>
        <Button variant="outlined" onClick={handleImmerDemo}>Increase Value (Immer)</Button>
      </div>

      <Suspense fallback={<div>Loading Confetti...</div>}>
        {confettiActive && <LazyConfetti width={window.innerWidth} height={window.innerHeight} />}
      </Suspense>
    </div>
  );
}

export default Level3;
"#
        .to_string(),
    )
}

fn about(ctx: &SynthContext<'_>) -> ModuleSource {
    let with_helmet = ctx.has("react-helmet");

    let mut imports = vec![ImportDecl::default("React", "react")];
    if with_helmet {
        imports.push(ImportDecl::named(&["Helmet"], "react-helmet"));
    }

    let package_items: String = ctx
        .packages
        .iter()
        .map(|package| format!("        <li><code>{}</code></li>\n", package))
        .collect();

    let mut body = String::from(
        "const About = () => {\n  return (\n    <div className=\"page\" style={{ textAlign: 'left' }}>\n",
    );
    if with_helmet {
        body.push_str(&format!(
            "      <Helmet>\n        <title>About - {}</title>\n      </Helmet>\n",
            ctx.slug
        ));
    }
    body.push_str("      <h1>About</h1>\n");
    body.push_str(&format!(
        "      <p>{} was scaffolded with the {} package tier.</p>\n",
        ctx.slug, ctx.plan.tier
    ));
    body.push_str("      <h2>Installed packages</h2>\n      <ul>\n");
    body.push_str(&package_items);
    body.push_str("      </ul>\n    </div>\n  );\n};\n\nexport default About;\n");

    ModuleSource::new(imports, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize::normalize, planner::plan, tiers::resolve};
    use crate::domain::model::Tier;

    #[test]
    fn test_level1_body_renders_whole_template() {
        let plan = plan(Tier::Common);
        let packages = resolve(Tier::Common);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = page(&ctx, PageId::Level1).render();
        assert!(rendered.starts_with("import React, { useState } from 'react';\n"));
        assert!(rendered.contains("<FaReact size={64} color=\"#61dafb\" />"));
        assert!(rendered.contains("validationSchema={formSchema}"));
        assert!(rendered.trim_end().ends_with("export default Level1;"));
    }

    #[test]
    fn test_about_lists_tier_packages() {
        let plan = plan(Tier::Full);
        let packages = resolve(Tier::Full);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = page(&ctx, PageId::About).render();
        assert!(rendered.contains("<title>About - demo</title>"));
        assert!(rendered.contains("with the full package tier"));
        for package in packages.iter() {
            assert!(rendered.contains(&format!("<code>{}</code>", package)));
        }
    }

    #[test]
    fn test_about_without_helmet_on_common() {
        let plan = plan(Tier::Common);
        let packages = resolve(Tier::Common);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = page(&ctx, PageId::About).render();
        assert!(!rendered.contains("Helmet"));
        assert!(rendered.starts_with("import React from 'react';\n\nconst About"));
    }

    #[test]
    fn test_level3_uses_lazy_confetti() {
        let plan = plan(Tier::Full);
        let packages = resolve(Tier::Full);
        let slug = normalize("demo").unwrap();
        let ctx = SynthContext {
            plan: &plan,
            packages: &packages,
            slug: &slug,
        };

        let rendered = page(&ctx, PageId::Level3).render();
        assert!(rendered.contains("import('react-confetti')"));
        assert!(!rendered.contains("import Confetti"));
    }
}
