//! Page sections, layout components and the `lib`/`hooks` sources

use serde::Serialize;
use serde_json::json;

use super::common::to_json;
use super::js_string;
use crate::catalog::Template;

pub(super) const UTILS: &str = r#"import { type ClassValue, clsx } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}"#;

pub(super) const USE_SCROLL: &str = r#""use client";

import { useState, useEffect } from "react";

export function useScroll(threshold = 10) {
  const [scrolled, setScrolled] = useState(false);

  useEffect(() => {
    const handleScroll = () => {
      setScrolled(window.scrollY > threshold);
    };

    window.addEventListener("scroll", handleScroll);
    return () => window.removeEventListener("scroll", handleScroll);
  }, [threshold]);

  return scrolled;
}"#;

/// Shared page body for `page.tsx` and `App.tsx`
pub(super) const PAGE_IMPORTS: &str = r#"import { Header } from "@/components/layout/header";
import { Footer } from "@/components/layout/footer";
import { Hero } from "@/components/sections/hero";
import { Features } from "@/components/sections/features";
import { CTA } from "@/components/sections/cta";"#;

pub(super) const PAGE_BODY: &str = r#"    <div className="min-h-screen bg-background">
      <Header />
      <main>
        <Hero />
        <Features />
        <CTA />
      </main>
      <Footer />
    </div>"#;

#[derive(Serialize)]
struct FeatureCard<'a> {
    title: &'a str,
    description: String,
    icon: &'static str,
}

fn feature_cards(template: &Template) -> Vec<FeatureCard<'_>> {
    template
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| FeatureCard {
            title: feature,
            description: format!(
                "Experience the power of {} in your application.",
                feature.to_lowercase()
            ),
            icon: match i % 3 {
                0 => "Zap",
                1 => "Shield",
                _ => "Star",
            },
        })
        .collect()
}

pub(super) fn header(template: &Template) -> String {
    format!(
        r##""use client";

import {{ useState }} from "react";
import {{ Button }} from "@/components/ui/button";
import {{ Menu, X }} from "lucide-react";

export function Header() {{
  const [isMenuOpen, setIsMenuOpen] = useState(false);

  return (
    <header className="sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
      <div className="container flex h-16 items-center justify-between">
        <div className="flex items-center gap-6">
          <a href="/" className="flex items-center space-x-2">
            <span className="text-xl font-bold">{name}</span>
          </a>
          <nav className="hidden md:flex gap-6">
            <a href="#features" className="text-sm font-medium hover:text-primary transition-colors">
              Features
            </a>
            <a href="#about" className="text-sm font-medium hover:text-primary transition-colors">
              About
            </a>
            <a href="#contact" className="text-sm font-medium hover:text-primary transition-colors">
              Contact
            </a>
          </nav>
        </div>

        <div className="flex items-center gap-4">
          <Button className="hidden md:inline-flex">Get Started</Button>
          <button
            className="md:hidden"
            onClick={{() => setIsMenuOpen(!isMenuOpen)}}
          >
            {{isMenuOpen ? <X /> : <Menu />}}
          </button>
        </div>
      </div>

      {{isMenuOpen && (
        <div className="md:hidden border-t">
          <nav className="container flex flex-col gap-4 py-4">
            <a href="#features" className="text-sm font-medium">Features</a>
            <a href="#about" className="text-sm font-medium">About</a>
            <a href="#contact" className="text-sm font-medium">Contact</a>
            <Button className="w-full">Get Started</Button>
          </nav>
        </div>
      )}}
    </header>
  );
}}"##,
        name = template.name
    )
}

pub(super) fn footer(template: &Template) -> String {
    format!(
        r##"export function Footer() {{
  return (
    <footer className="border-t bg-background">
      <div className="container py-12">
        <div className="grid grid-cols-1 md:grid-cols-4 gap-8">
          <div>
            <h3 className="font-bold text-lg mb-4">{name}</h3>
            <p className="text-sm text-muted-foreground">
              {description}
            </p>
          </div>
          <div>
            <h4 className="font-semibold mb-4">Product</h4>
            <ul className="space-y-2 text-sm text-muted-foreground">
              <li><a href="#" className="hover:text-foreground">Features</a></li>
              <li><a href="#" className="hover:text-foreground">Pricing</a></li>
              <li><a href="#" className="hover:text-foreground">FAQ</a></li>
            </ul>
          </div>
          <div>
            <h4 className="font-semibold mb-4">Company</h4>
            <ul className="space-y-2 text-sm text-muted-foreground">
              <li><a href="#" className="hover:text-foreground">About</a></li>
              <li><a href="#" className="hover:text-foreground">Blog</a></li>
              <li><a href="#" className="hover:text-foreground">Careers</a></li>
            </ul>
          </div>
          <div>
            <h4 className="font-semibold mb-4">Legal</h4>
            <ul className="space-y-2 text-sm text-muted-foreground">
              <li><a href="#" className="hover:text-foreground">Privacy</a></li>
              <li><a href="#" className="hover:text-foreground">Terms</a></li>
              <li><a href="#" className="hover:text-foreground">License</a></li>
            </ul>
          </div>
        </div>
        <div className="mt-8 pt-8 border-t text-center text-sm text-muted-foreground">
          © {{new Date().getFullYear()}} {name}. All rights reserved.
        </div>
      </div>
    </footer>
  );
}}"##,
        name = template.name,
        description = template.description
    )
}

pub(super) fn hero(template: &Template) -> String {
    format!(
        r#""use client";

import {{ Button }} from "@/components/ui/button";
import {{ ArrowRight }} from "lucide-react";

export function Hero() {{
  return (
    <section className="container py-24 md:py-32">
      <div className="mx-auto max-w-4xl text-center">
        <h1 className="text-4xl md:text-6xl font-bold tracking-tight mb-6">
          Welcome to {name}
        </h1>
        <p className="text-xl text-muted-foreground mb-8 max-w-2xl mx-auto">
          {description}
        </p>
        <div className="flex flex-col sm:flex-row gap-4 justify-center">
          <Button size="lg" className="gap-2">
            Get Started <ArrowRight className="w-4 h-4" />
          </Button>
          <Button size="lg" variant="outline">
            Learn More
          </Button>
        </div>
      </div>
    </section>
  );
}}"#,
        name = template.name,
        description = template.description
    )
}

pub(super) fn features(template: &Template) -> String {
    let cards = serde_json::to_string_pretty(&feature_cards(template)).unwrap_or_default();

    format!(
        r#"import {{ Card, CardContent, CardHeader, CardTitle }} from "@/components/ui/card";
import {{ Badge }} from "@/components/ui/badge";

const features = {cards};

export function Features() {{
  return (
    <section id="features" className="container py-24">
      <div className="text-center mb-12">
        <Badge className="mb-4">Features</Badge>
        <h2 className="text-3xl md:text-4xl font-bold mb-4">
          Everything you need
        </h2>
        <p className="text-muted-foreground max-w-2xl mx-auto">
          Powerful features to help you build amazing applications
        </p>
      </div>
      <div className="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
        {{features.map((feature, index) => (
          <Card key={{index}}>
            <CardHeader>
              <CardTitle>{{feature.title}}</CardTitle>
            </CardHeader>
            <CardContent>
              <p className="text-sm text-muted-foreground">
                {{feature.description}}
              </p>
            </CardContent>
          </Card>
        ))}}
      </div>
    </section>
  );
}}"#
    )
}

pub(super) fn cta(template: &Template) -> String {
    format!(
        r#"import {{ Button }} from "@/components/ui/button";

export function CTA() {{
  return (
    <section className="container py-24">
      <div className="rounded-lg bg-primary text-primary-foreground p-12 text-center">
        <h2 className="text-3xl md:text-4xl font-bold mb-4">
          Ready to get started?
        </h2>
        <p className="text-lg mb-8 opacity-90 max-w-2xl mx-auto">
          Join thousands of users who are already using {name}
        </p>
        <Button size="lg" variant="secondary">
          Start Free Trial
        </Button>
      </div>
    </section>
  );
}}"#,
        name = template.name
    )
}

/// `src/lib/constants.ts`: app metadata plus the palette verbatim
pub(super) fn constants(template: &Template) -> String {
    let social = json!({
        "twitter": "https://twitter.com",
        "github": "https://github.com",
        "linkedin": "https://linkedin.com"
    });

    format!(
        "export const APP_NAME = {name};\n\
         export const APP_DESCRIPTION = {description};\n\
         \n\
         export const COLORS = {colors};\n\
         \n\
         export const FEATURES = {features};\n\
         \n\
         export const SOCIAL_LINKS = {social};",
        name = js_string(template.name),
        description = js_string(template.description),
        colors = serde_json::to_string_pretty(&template.colors).unwrap_or_default(),
        features = serde_json::to_string_pretty(&template.features).unwrap_or_default(),
        social = to_json(&social),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn test_constants_embed_palette_verbatim() {
        let template = find("glassmorphism").unwrap();
        let text = constants(template);

        assert!(text.starts_with("export const APP_NAME = \"Glassmorphism\";\n"));
        assert!(text.contains("export const COLORS = {\n  \"primary\": "));
        for (_, value) in template.colors.iter() {
            assert!(text.contains(value), "{} missing", value);
        }
    }

    #[test]
    fn test_feature_icons_cycle() {
        let template = find("neo-brutalism").unwrap();
        let cards = feature_cards(template);
        let icons: Vec<_> = cards.iter().map(|c| c.icon).collect();
        assert_eq!(&icons[..3], &["Zap", "Shield", "Star"]);
        assert!(cards[0].description.starts_with("Experience the power of "));
    }

    #[test]
    fn test_sections_use_template_name() {
        let template = find("coffee-shop-cozy").unwrap();
        assert!(hero(template).contains(&format!("Welcome to {}", template.name)));
        assert!(cta(template).contains(template.name));
        assert!(header(template).contains("onClick={() => setIsMenuOpen(!isMenuOpen)}"));
        assert!(footer(template).contains("© {new Date().getFullYear()}"));
        assert!(features(template).contains("{features.map((feature, index) => ("));
    }
}
