//! React + Vite specific files

use serde_json::json;

use super::common::to_json;
use super::sections::{PAGE_BODY, PAGE_IMPORTS};
use super::ProjectTree;
use crate::catalog::Template;
use crate::theme::ThemeConfig;

const MAIN: &str = r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)"#;

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
})"#;

fn app() -> String {
    format!(
        "{}\n\nfunction App() {{\n  return (\n{}\n  );\n}}\n\nexport default App;",
        PAGE_IMPORTS, PAGE_BODY
    )
}

/// Escape text for an HTML attribute or element body
fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn index_html(template: &Template) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta name="description" content="{description}" />
    <title>{name}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>"#,
        name = html_escape(template.name),
        description = html_escape(template.description),
    )
}

fn tsconfig_node() -> String {
    to_json(&json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true
        },
        "include": ["vite.config.ts"]
    }))
}

pub(super) fn add_files(tree: &mut ProjectTree, template: &Template, theme: &ThemeConfig) {
    tree.add("src/App.tsx", app());
    tree.add("src/main.tsx", MAIN);
    tree.add("src/index.css", theme.css_variables.as_str());
    tree.add("index.html", index_html(template));
    tree.add("tailwind.config.ts", theme.tailwind_config.as_str());
    tree.add("postcss.config.js", POSTCSS_CONFIG);
    tree.add("vite.config.ts", VITE_CONFIG);
    tree.add("tsconfig.node.json", tsconfig_node());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_index_html_title() {
        let html = index_html(find("art-gallery").unwrap());
        assert!(html.contains("<title>Art Gallery</title>"));
        assert!(html.contains(r#"<script type="module" src="/src/main.tsx"></script>"#));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_app_exports_default() {
        assert!(app().ends_with("export default App;"));
    }

    #[test]
    fn test_tsconfig_node_is_json() {
        let value: serde_json::Value = serde_json::from_str(&tsconfig_node()).unwrap();
        assert_eq!(value["include"][0], "vite.config.ts");
    }
}
