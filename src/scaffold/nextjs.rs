//! Next.js (App Router) specific files

use super::sections::{PAGE_BODY, PAGE_IMPORTS};
use super::{js_string, ProjectTree};
use crate::catalog::Template;
use crate::theme::ThemeConfig;

const POSTCSS_CONFIG: &str = r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}"#;

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  images: {
    domains: [],
  },
}

module.exports = nextConfig"#;

fn layout(template: &Template) -> String {
    format!(
        r#"import type {{ Metadata }} from "next";
import "./globals.css";

export const metadata: Metadata = {{
  title: {title},
  description: {description},
}};

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode;
}}) {{
  return (
    <html lang="en">
      <body className="antialiased">{{children}}</body>
    </html>
  );
}}"#,
        title = js_string(template.name),
        description = js_string(template.description),
    )
}

fn home_page() -> String {
    format!(
        "{}\n\nexport default function Home() {{\n  return (\n{}\n  );\n}}",
        PAGE_IMPORTS, PAGE_BODY
    )
}

pub(super) fn add_files(tree: &mut ProjectTree, template: &Template, theme: &ThemeConfig) {
    tree.add("src/app/layout.tsx", layout(template));
    tree.add("src/app/page.tsx", home_page());
    tree.add("src/app/globals.css", theme.css_variables.as_str());
    tree.add("tailwind.config.ts", theme.tailwind_config.as_str());
    tree.add("postcss.config.js", POSTCSS_CONFIG);
    tree.add("next.config.js", NEXT_CONFIG);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_layout_metadata() {
        let text = layout(find("japanese-zen").unwrap());
        assert!(text.contains("  title: \"Japanese Zen\",\n"));
        assert!(text.contains("<body className=\"antialiased\">{children}</body>"));
    }

    #[test]
    fn test_home_page_renders_sections() {
        let page = home_page();
        assert!(page.starts_with("import { Header }"));
        assert!(page.contains("export default function Home() {\n  return (\n    <div"));
        assert!(page.ends_with("    </div>\n  );\n}"));
    }
}
