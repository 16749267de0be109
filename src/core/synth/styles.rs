pub const MAIN_CSS: &str = r#"@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700&display=swap');

:root {
  /* Light Mode Palette */
  --color-background: #ffffff;
  --color-text: #333333;
  --color-primary: #6200ee;
  --color-primary-light: #bb86fc;
  --color-header-background: #f5f5f5;
  --color-footer-background: #f5f5f5;

  /* Typography & Spacing */
  --font-family: 'Inter', sans-serif;
  --font-size-base: 16px;
  --font-size-sm: 0.875rem;
  --font-size-md: 1rem;
  --font-size-lg: 1.5rem;
  --font-size-xl: 2rem;
  --line-height: 1.6;
  --transition-duration: 0.3s;
}

[data-theme="dark"] {
  /* Dark Mode Palette */
  --color-background: #121212;
  --color-text: #e0e0e0;
  --color-primary: #bb86fc;
  --color-primary-light: #6200ee;
  --color-header-background: #333333;
  --color-footer-background: #1e1e1e;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  font-size: var(--font-size-base);
}

body {
  font-family: var(--font-family);
  background-color: var(--color-background);
  color: var(--color-text);
  line-height: var(--line-height);
  transition: background-color var(--transition-duration), color var(--transition-duration);
}

a {
  color: var(--color-primary);
  text-decoration: none;
  transition: color var(--transition-duration);
}

a:hover {
  color: var(--color-primary-light);
}

.app-container {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

header {
  padding: 1rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  background-color: var(--color-header-background);
  transition: background-color var(--transition-duration);
}

.footer {
  padding: 1rem 2rem;
  text-align: center;
  background-color: var(--color-footer-background);
  transition: background-color var(--transition-duration);
}

main {
  flex: 1;
  padding: 2rem;
}

h1 {
  font-size: var(--font-size-xl);
  margin-bottom: 1rem;
}

h2 {
  font-size: var(--font-size-lg);
  margin-bottom: 0.75rem;
}

p {
  font-size: var(--font-size-md);
  margin-bottom: 1rem;
}

button {
  cursor: pointer;
  border: none;
  padding: 0.75rem 1.5rem;
  border-radius: 4px;
  font-size: var(--font-size-md);
  font-weight: 500;
  transition: background-color var(--transition-duration), transform var(--transition-duration);
}

button:hover {
  transform: scale(1.02);
}

.nav-link {
  margin-right: 1rem;
}

.page {
  max-width: 800px;
  margin: 0 auto;
  text-align: center;
}

.section {
  margin: 1rem;
}

/* Form styles */
.form-group {
  margin-bottom: 1rem;
}
.form-input {
  padding: 0.5rem;
  width: 100%;
  font-size: var(--font-size-md);
  border: 1px solid #ccc;
  border-radius: 4px;
  transition: border-color var(--transition-duration);
}
.form-input:focus {
  border-color: var(--color-primary);
}
.form-error {
  color: red;
  font-size: var(--font-size-sm);
  margin-top: 0.25rem;
}
"#;
