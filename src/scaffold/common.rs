//! Files shared by both frameworks: readme, manifest and tool configs

use serde_json::{json, Map, Value};

use super::Framework;
use crate::catalog::Template;

pub(super) const GITIGNORE: &str = r#"# Dependencies
node_modules
/.pnp
.pnp.js

# Testing
/coverage

# Next.js
/.next/
/out/

# Production
/build
/dist

# Misc
.DS_Store
*.pem

# Debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Local env files
.env*.local
.env

# Vercel
.vercel

# TypeScript
*.tsbuildinfo
next-env.d.ts

# IDE
.vscode
.idea
*.swp
*.swo
*~
"#;

pub(super) const ENV_EXAMPLE: &str = r#"# App Configuration
NEXT_PUBLIC_APP_NAME="My App"
NEXT_PUBLIC_APP_URL="http://localhost:3000"

# API Configuration (if needed)
# NEXT_PUBLIC_API_URL="https://api.example.com"

# Analytics (optional)
# NEXT_PUBLIC_GA_ID=""
"#;

const NEXTJS_TREE: &str = "
├── src/
│   ├── app/
│   │   ├── layout.tsx
│   │   ├── page.tsx
│   │   └── globals.css
│   ├── components/
│   │   ├── ui/          # shadcn/ui components
│   │   ├── layout/      # Layout components
│   │   └── sections/    # Page sections
│   ├── lib/
│   │   ├── utils.ts
│   │   └── constants.ts
│   └── hooks/           # Custom React hooks
├── public/
│   └── assets/
└── tailwind.config.ts
";

const REACT_TREE: &str = "
├── src/
│   ├── components/
│   │   ├── ui/          # shadcn/ui components
│   │   ├── layout/      # Layout components
│   │   └── sections/    # Page sections
│   ├── lib/
│   │   ├── utils.ts
│   │   └── constants.ts
│   ├── hooks/           # Custom React hooks
│   ├── App.tsx
│   ├── main.tsx
│   └── index.css
├── public/
│   └── assets/
└── tailwind.config.ts
";

/// Runtime dependencies shared by both flavors
const BASE_DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "^18.3.1"),
    ("react-dom", "^18.3.1"),
    ("typescript", "^5.3.3"),
    ("tailwindcss", "^4.0.0"),
    ("tailwindcss-animate", "^1.0.7"),
    ("@radix-ui/react-slot", "^1.0.2"),
    ("@radix-ui/react-accordion", "^1.1.2"),
    ("@radix-ui/react-alert-dialog", "^1.0.5"),
    ("@radix-ui/react-checkbox", "^1.0.4"),
    ("@radix-ui/react-dialog", "^1.0.5"),
    ("@radix-ui/react-dropdown-menu", "^2.0.6"),
    ("@radix-ui/react-label", "^2.0.2"),
    ("@radix-ui/react-radio-group", "^1.1.3"),
    ("@radix-ui/react-select", "^2.0.0"),
    ("@radix-ui/react-separator", "^1.0.3"),
    ("@radix-ui/react-switch", "^1.0.3"),
    ("@radix-ui/react-tabs", "^1.0.4"),
    ("@radix-ui/react-toast", "^1.1.5"),
    ("@radix-ui/react-tooltip", "^1.0.7"),
    ("class-variance-authority", "^0.7.0"),
    ("clsx", "^2.1.0"),
    ("tailwind-merge", "^2.2.1"),
    ("lucide-react", "^0.344.0"),
    ("framer-motion", "^11.0.3"),
];

const BASE_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/node", "^20.11.5"),
    ("@types/react", "^18.2.48"),
    ("@types/react-dom", "^18.2.18"),
    ("eslint", "^8.56.0"),
    ("autoprefixer", "^10.4.17"),
    ("postcss", "^8.4.33"),
];

const NEXTJS_DEV_DEPENDENCIES: &[(&str, &str)] = &[("eslint-config-next", "^15.0.0")];

const REACT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@vitejs/plugin-react", "^4.2.1"),
    ("vite", "^5.0.11"),
    ("@typescript-eslint/eslint-plugin", "^6.19.1"),
    ("@typescript-eslint/parser", "^6.19.1"),
    ("eslint-plugin-react-hooks", "^4.6.0"),
    ("eslint-plugin-react-refresh", "^0.4.5"),
];

fn version_map<'a>(groups: impl IntoIterator<Item = &'a [(&'a str, &'a str)]>) -> Value {
    let mut map = Map::new();
    for group in groups {
        for (name, version) in group {
            map.insert(name.to_string(), Value::String(version.to_string()));
        }
    }
    Value::Object(map)
}

/// Pretty-print with two-space indentation
pub(super) fn to_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

pub(super) fn readme(template: &Template, framework: Framework) -> String {
    let features = template
        .features
        .iter()
        .map(|f| format!("- ✨ {}", f))
        .collect::<Vec<_>>()
        .join("\n");

    let (open_line, tree, tech, run_script, css_path) = match framework {
        Framework::Nextjs => (
            "Open [http://localhost:3000](http://localhost:3000) with your browser.",
            NEXTJS_TREE,
            "Next.js 15 (App Router)",
            "- `npm run start` - Start production server",
            "src/app/globals.css",
        ),
        Framework::React => (
            "Open [http://localhost:5173](http://localhost:5173) with your browser.",
            REACT_TREE,
            "React 18 + Vite",
            "- `npm run preview` - Preview production build",
            "src/index.css",
        ),
    };

    let colors = &template.colors;

    format!(
        r#"# {name} - {framework} Template

{description}

## 🎨 Design Features

{features}

## 🚀 Getting Started

### Prerequisites
- Node.js 18+
- npm or yarn

### Installation

```bash
# Install dependencies
npm install

# Run development server
npm run dev
```

{open_line}

## 📁 Project Structure

```
{tree}
```

## 🎨 Color Palette

- **Primary:** {primary}
- **Secondary:** {secondary}
- **Accent:** {accent}
- **Background:** {background}
- **Foreground:** {foreground}

## 🛠️ Tech Stack

- {tech}
- TypeScript
- Tailwind CSS 4
- shadcn/ui components
- Lucide React icons
- Framer Motion (animations)

## 📝 Available Scripts

- `npm run dev` - Start development server
- `npm run build` - Build for production
- `npm run lint` - Run ESLint
{run_script}

## 📦 Components Included

- **UI Components:** Button, Card, Input, Badge, Alert, Tabs, etc.
- **Layout Components:** Header, Footer, Sidebar, Navigation
- **Section Components:** Hero, Features, Pricing, Testimonials, CTA
- **Form Components:** Contact Form, Newsletter, Search

## 🎯 Customization

All colors and styles can be customized in:
- `tailwind.config.ts` - Tailwind configuration
- `{css_path}` - CSS variables

## 📄 License

MIT License - feel free to use this template for your projects!

## 🤝 Support

For issues and questions, please open an issue on GitHub.

---

Built with ❤️ using {framework} and Tailwind CSS
"#,
        name = template.name,
        framework = framework.display_name(),
        description = template.description,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        foreground = colors.foreground,
    )
}

pub(super) fn package_json(template: &Template, framework: Framework) -> String {
    let name = format!("{}-{}", template.slug, framework.key());

    let manifest = match framework {
        Framework::Nextjs => json!({
            "name": name,
            "version": "1.0.0",
            "private": true,
            "description": template.description,
            "scripts": {
                "dev": "next dev",
                "build": "next build",
                "start": "next start",
                "lint": "next lint",
            },
            "dependencies": version_map([&[("next", "^15.0.0")][..], BASE_DEPENDENCIES]),
            "devDependencies": version_map([BASE_DEV_DEPENDENCIES, NEXTJS_DEV_DEPENDENCIES]),
        }),
        Framework::React => json!({
            "name": name,
            "version": "1.0.0",
            "private": true,
            "description": template.description,
            "type": "module",
            "scripts": {
                "dev": "vite",
                "build": "tsc && vite build",
                "preview": "vite preview",
                "lint": "eslint . --ext ts,tsx --report-unused-disable-directives --max-warnings 0",
            },
            "dependencies": version_map([BASE_DEPENDENCIES]),
            "devDependencies": version_map([BASE_DEV_DEPENDENCIES, REACT_DEV_DEPENDENCIES]),
        }),
    };

    to_json(&manifest)
}

pub(super) fn tsconfig(framework: Framework) -> String {
    let config = match framework {
        Framework::Nextjs => json!({
            "compilerOptions": {
                "target": "ES2017",
                "lib": ["dom", "dom.iterable", "esnext"],
                "allowJs": true,
                "skipLibCheck": true,
                "strict": true,
                "noEmit": true,
                "esModuleInterop": true,
                "module": "esnext",
                "moduleResolution": "bundler",
                "resolveJsonModule": true,
                "isolatedModules": true,
                "jsx": "preserve",
                "incremental": true,
                "plugins": [{ "name": "next" }],
                "paths": { "@/*": ["./src/*"] },
            },
            "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
            "exclude": ["node_modules"],
        }),
        Framework::React => json!({
            "compilerOptions": {
                "target": "ES2020",
                "useDefineForClassFields": true,
                "lib": ["ES2020", "DOM", "DOM.Iterable"],
                "module": "ESNext",
                "skipLibCheck": true,
                "moduleResolution": "bundler",
                "allowImportingTsExtensions": true,
                "resolveJsonModule": true,
                "isolatedModules": true,
                "noEmit": true,
                "jsx": "react-jsx",
                "strict": true,
                "noUnusedLocals": true,
                "noUnusedParameters": true,
                "noFallthroughCasesInSwitch": true,
                "paths": { "@/*": ["./src/*"] },
            },
            "include": ["src"],
            "references": [{ "path": "./tsconfig.node.json" }],
        }),
    };

    to_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    fn manifest(framework: Framework) -> Value {
        let text = package_json(find("startup-saas").unwrap(), framework);
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_nextjs_manifest() {
        let pkg = manifest(Framework::Nextjs);
        assert_eq!(pkg["name"], "startup-saas-nextjs");
        assert_eq!(pkg["dependencies"]["next"], "^15.0.0");
        assert_eq!(pkg["dependencies"]["react"], "^18.3.1");
        assert_eq!(pkg["devDependencies"]["eslint-config-next"], "^15.0.0");
        assert!(pkg.get("type").is_none());
    }

    #[test]
    fn test_react_manifest() {
        let pkg = manifest(Framework::React);
        assert_eq!(pkg["name"], "startup-saas-react");
        assert_eq!(pkg["type"], "module");
        assert!(pkg["dependencies"].get("next").is_none());
        assert_eq!(pkg["devDependencies"]["vite"], "^5.0.11");
        assert_eq!(pkg["dependencies"]["tailwindcss-animate"], "^1.0.7");
    }

    #[test]
    fn test_manifest_keeps_key_order() {
        let text = package_json(find("startup-saas").unwrap(), Framework::Nextjs);
        let name = text.find("\"name\"").unwrap();
        let scripts = text.find("\"scripts\"").unwrap();
        let deps = text.find("\"dependencies\"").unwrap();
        assert!(name < scripts && scripts < deps);
        assert!(text.starts_with("{\n  \"name\""));
    }

    #[test]
    fn test_readme_lists_palette_and_features() {
        let template = find("nature-organic").unwrap();
        let text = readme(template, Framework::React);
        assert!(text.starts_with("# Nature Organic - React Template"));
        for (_, value) in template.colors.iter() {
            assert!(text.contains(value));
        }
        for feature in template.features {
            assert!(text.contains(&format!("- ✨ {}", feature)));
        }
        assert!(text.contains("http://localhost:5173"));
    }

    #[test]
    fn test_tsconfig_variants() {
        let next: Value = serde_json::from_str(&tsconfig(Framework::Nextjs)).unwrap();
        let react: Value = serde_json::from_str(&tsconfig(Framework::React)).unwrap();
        assert_eq!(next["compilerOptions"]["jsx"], "preserve");
        assert_eq!(react["references"][0]["path"], "./tsconfig.node.json");
    }
}
